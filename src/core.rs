//! The core context: everything the plugin owns for its lifetime.
//!
//! [`GuiCore`] replaces the process-wide globals of a classic C core with a
//! single instance the ABI shim constructs in `retro_init` and drops in
//! `retro_deinit`. It owns the offscreen framebuffer, the input poller, the
//! GUI state, and an optional change sink, and advances one frame at a time
//! against whatever [`Host`] drives it.

use crate::descriptor::DescriptorError;
use crate::event::ChangeSink;
use crate::fb::{Framebuffer, FramebufferError};
use crate::gui::DemoUi;
use crate::host::Host;
use crate::poller::InputPoller;
use thiserror::Error;

/// Fixed video geometry.
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

/// Fixed timing metadata reported to the host. No audio is produced; the
/// sample rate is nominal.
pub const FRAME_RATE: f64 = 60.0;
pub const SAMPLE_RATE: f64 = 30_000.0;

/// Fatal initialization failures. Nothing in the per-frame path can fail.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("input descriptor setup failed: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("framebuffer setup failed: {0}")]
    Framebuffer(#[from] FramebufferError),
}

pub struct GuiCore {
    fb: Framebuffer,
    poller: InputPoller,
    ui: DemoUi,
    sink: Option<Box<dyn ChangeSink>>,
}

impl GuiCore {
    pub fn new() -> Result<Self, CoreError> {
        Ok(Self {
            fb: Framebuffer::new(WINDOW_WIDTH, WINDOW_HEIGHT)?,
            poller: InputPoller::new()?,
            ui: DemoUi::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            sink: None,
        })
    }

    /// Installs a sink that will see every input change from now on.
    pub fn set_change_sink(&mut self, sink: Box<dyn ChangeSink>) {
        self.sink = Some(sink);
    }

    pub fn clear_change_sink(&mut self) {
        self.sink = None;
    }

    /// Advances one frame: polls input, derives GUI pointer state from the
    /// joypad, draws the demo, and presents the buffer.
    ///
    /// The host owns the frame cadence; this method never sleeps.
    pub fn run_frame(&mut self, host: &mut dyn Host) {
        self.poller.poll(host, self.sink.as_deref_mut());

        let mask = self.poller.joypad_mask();
        let pressed = |id: u32| mask & (1 << id) != 0;
        self.ui.steer(
            pressed(libretro_sys::DEVICE_ID_JOYPAD_UP),
            pressed(libretro_sys::DEVICE_ID_JOYPAD_DOWN),
            pressed(libretro_sys::DEVICE_ID_JOYPAD_LEFT),
            pressed(libretro_sys::DEVICE_ID_JOYPAD_RIGHT),
            pressed(libretro_sys::DEVICE_ID_JOYPAD_B),
        );

        self.ui.frame(&mut self.fb);
        host.present_frame(
            self.fb.pixels(),
            self.fb.width(),
            self.fb.height(),
            self.fb.pitch(),
        );
    }

    /// Current joypad state folded into a bitmask (bit `i` set iff button id
    /// `i` is down), as of the last poll.
    pub fn joypad_mask(&self) -> u32 {
        self.poller.joypad_mask()
    }

    pub fn poller(&self) -> &InputPoller {
        &self.poller
    }

    pub fn ui(&self) -> &DemoUi {
        &self.ui
    }
}
