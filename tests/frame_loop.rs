//! Drives whole frames through a scripted frontend fake.

use padgui::{ChangeSink, DeviceKind, GuiCore, Host, InputChange, WINDOW_HEIGHT, WINDOW_WIDTH};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const JOYPAD: u32 = libretro_sys::DEVICE_JOYPAD;
const ANALOG: u32 = libretro_sys::DEVICE_ANALOG;
const B: u32 = libretro_sys::DEVICE_ID_JOYPAD_B;
const RIGHT: u32 = libretro_sys::DEVICE_ID_JOYPAD_RIGHT;

/// Frontend stand-in: scripted input states plus a record of every present.
#[derive(Default)]
struct ScriptedHost {
    state: HashMap<(u32, u32, u32, u32), i16>,
    polls: usize,
    presents: Vec<(u32, u32, usize, usize)>,
}

impl ScriptedHost {
    fn set(&mut self, port: u32, device: u32, index: u32, id: u32, value: i16) {
        self.state.insert((port, device, index, id), value);
    }
}

impl Host for ScriptedHost {
    fn poll_input(&mut self) {
        self.polls += 1;
    }

    fn input_state(&mut self, port: u32, device: u32, index: u32, id: u32) -> i16 {
        self.state
            .get(&(port, device, index, id))
            .copied()
            .unwrap_or(0)
    }

    fn present_frame(&mut self, pixels: &[u32], width: u32, height: u32, pitch: usize) {
        self.presents.push((width, height, pitch, pixels.len()));
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<InputChange>>>);

impl Recorder {
    fn take(&self) -> Vec<InputChange> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl ChangeSink for Recorder {
    fn on_change(&mut self, change: &InputChange) {
        self.0.lock().unwrap().push(*change);
    }
}

#[test]
fn every_frame_polls_once_and_presents_fixed_geometry() {
    let mut core = GuiCore::new().unwrap();
    let mut host = ScriptedHost::default();

    for _ in 0..3 {
        core.run_frame(&mut host);
    }

    assert_eq!(host.polls, 3);
    assert_eq!(host.presents.len(), 3);
    for (width, height, pitch, len) in host.presents {
        assert_eq!((width, height), (WINDOW_WIDTH, WINDOW_HEIGHT));
        assert_eq!(pitch, WINDOW_WIDTH as usize * 4);
        assert_eq!(len, (WINDOW_WIDTH * WINDOW_HEIGHT) as usize);
    }
}

#[test]
fn press_and_release_flow_through_snapshot_and_sink() {
    let mut core = GuiCore::new().unwrap();
    let recorder = Recorder::default();
    core.set_change_sink(Box::new(recorder.clone()));
    let mut host = ScriptedHost::default();

    // Frame N: B pressed.
    host.set(0, JOYPAD, 0, B, 1);
    core.run_frame(&mut host);
    assert_eq!(core.poller().joypad().value(0, 0, B), Some(1));
    assert_eq!(core.joypad_mask(), 1 << B);
    let slots = core.poller().joypad().values();
    assert!(slots[1..].iter().all(|&v| v == 0), "only B's slot may move");
    assert_eq!(
        recorder.take(),
        vec![InputChange {
            port: 0,
            kind: DeviceKind::Joypad,
            index: 0,
            id: B,
            state: 1,
        }]
    );

    // Frame N+1: B released.
    host.set(0, JOYPAD, 0, B, 0);
    core.run_frame(&mut host);
    assert_eq!(core.poller().joypad().value(0, 0, B), Some(0));
    assert_eq!(core.joypad_mask(), 0);
    assert!(core.poller().joypad().values().iter().all(|&v| v == 0));
    let releases = recorder.take();
    assert_eq!(releases.len(), 1);
    assert_eq!((releases[0].id, releases[0].state), (B, 0));

    // Frame N+2: nothing changed, nothing emitted.
    core.run_frame(&mut host);
    assert!(recorder.take().is_empty());
}

#[test]
fn analog_readings_are_stored_bit_cast() {
    let mut core = GuiCore::new().unwrap();
    let recorder = Recorder::default();
    core.set_change_sink(Box::new(recorder.clone()));
    let mut host = ScriptedHost::default();

    host.set(
        0,
        ANALOG,
        libretro_sys::DEVICE_INDEX_ANALOG_LEFT,
        libretro_sys::DEVICE_ID_ANALOG_X,
        -12000,
    );
    core.run_frame(&mut host);

    let stored = core
        .poller()
        .analog()
        .value(0, 0, libretro_sys::DEVICE_ID_ANALOG_X)
        .unwrap();
    assert_eq!(stored as i16, -12000);

    let changes = recorder.take();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, DeviceKind::Analog);
    assert_eq!(changes[0].state as i16, -12000);
}

#[test]
fn dpad_steers_the_gui_pointer() {
    let mut core = GuiCore::new().unwrap();
    let mut host = ScriptedHost::default();

    core.run_frame(&mut host);
    let start = core.ui().pointer();

    host.set(0, JOYPAD, 0, RIGHT, 1);
    for _ in 0..4 {
        core.run_frame(&mut host);
    }
    let moved = core.ui().pointer();
    assert!(moved.0 > start.0, "pointer should drift right");
    assert_eq!(moved.1, start.1);
}
