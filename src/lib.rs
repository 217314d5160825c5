//! padgui: a libretro core that renders an immediate-mode GUI demo.
//!
//! The core polls RetroPad digital and analog input through a
//! descriptor-based snapshot table, maps the d-pad and B button onto a GUI
//! pointer, draws a small demo window into an offscreen XRGB8888 buffer, and
//! hands that buffer to the frontend every frame. There is no emulation, no
//! save state, and no audio.
//!
//! The library half of the crate (everything except [`ffi`]) has no global
//! state: a [`GuiCore`] can be constructed directly and driven by any
//! [`Host`] implementation, which is how the tests run whole frames without
//! a frontend.

pub mod core;
pub mod descriptor;
pub mod event;
pub mod fb;
pub mod ffi;
mod font;
pub mod gui;
pub mod host;
pub mod logger;
pub mod poller;
pub mod sink;

pub use crate::core::{CoreError, GuiCore, FRAME_RATE, SAMPLE_RATE, WINDOW_HEIGHT, WINDOW_WIDTH};
pub use crate::descriptor::{Descriptor, DescriptorError, DeviceKind};
pub use crate::event::{ChangeSink, InputChange};
pub use crate::fb::{Framebuffer, FramebufferError};
pub use crate::host::Host;
pub use crate::poller::InputPoller;
