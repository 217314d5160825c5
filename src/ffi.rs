//! libretro ABI entry points.
//!
//! This is the boundary the frontend loads us through: plain `extern "C"`
//! functions over `libretro-sys` types. The shim owns the one `GuiCore`
//! instance (created in `retro_init`, dropped in `retro_deinit`) and the
//! registered frontend callbacks, and adapts those callbacks into the crate's
//! [`Host`] trait so nothing below this module touches a C function pointer.
//!
//! Serialization, cheats, and memory regions are unsupported by design and
//! report so; the frontend is required to handle that gracefully.

use crate::core::{GuiCore, FRAME_RATE, SAMPLE_RATE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::host::Host;
use libc::{c_char, c_uint, c_void, size_t};
use libretro_sys as sys;
use std::mem::MaybeUninit;
use std::ptr;
use std::thread;
use std::time::Duration;

const LIBRARY_NAME: &[u8] = b"padgui\0";
const LIBRARY_VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
const VALID_EXTENSIONS: &[u8] = b"\0";

/// End-of-frame yield. The host owns the frame cadence; this only keeps the
/// core from busy-spinning frontends that run unthrottled.
const FRAME_YIELD: Duration = Duration::from_millis(4);

static mut CORE: *mut GuiCore = ptr::null_mut();
static mut VIDEO_REFRESH_CB: Option<sys::VideoRefreshFn> = None;
static mut AUDIO_SAMPLE_CB: Option<sys::AudioSampleFn> = None;
static mut AUDIO_SAMPLE_BATCH_CB: Option<sys::AudioSampleBatchFn> = None;
static mut INPUT_POLL_CB: Option<sys::InputPollFn> = None;
static mut INPUT_STATE_CB: Option<sys::InputStateFn> = None;

/// [`Host`] view over the registered frontend callbacks for one `retro_run`.
struct FrontendHost {
    poll: sys::InputPollFn,
    state: sys::InputStateFn,
    video: Option<sys::VideoRefreshFn>,
}

impl Host for FrontendHost {
    fn poll_input(&mut self) {
        unsafe { (self.poll)() }
    }

    fn input_state(&mut self, port: u32, device: u32, index: u32, id: u32) -> i16 {
        unsafe { (self.state)(port, device, index, id) }
    }

    fn present_frame(&mut self, pixels: &[u32], width: u32, height: u32, pitch: usize) {
        if let Some(video) = self.video {
            unsafe {
                video(
                    pixels.as_ptr() as *const c_void,
                    width,
                    height,
                    pitch as size_t,
                )
            }
        }
    }
}

/// Re-reads core variables after the frontend signals a change. The core
/// registers no variables, so there is nothing to read back.
fn check_variables() {}

#[no_mangle]
pub unsafe extern "C" fn retro_init() {
    if !CORE.is_null() {
        return;
    }
    match GuiCore::new() {
        Ok(core) => CORE = Box::into_raw(Box::new(core)),
        Err(err) => {
            // This entry point has no way to report failure; a core that
            // could not allocate its buffers must not limp onward.
            log::error!("core initialization failed: {err}");
            std::process::abort();
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn retro_deinit() {
    if CORE.is_null() {
        return;
    }
    drop(Box::from_raw(CORE));
    CORE = ptr::null_mut();
}

#[no_mangle]
pub extern "C" fn retro_api_version() -> c_uint {
    sys::API_VERSION
}

#[no_mangle]
pub unsafe extern "C" fn retro_get_system_info(info: *mut sys::SystemInfo) {
    let info = &mut *info;
    info.library_name = LIBRARY_NAME.as_ptr() as *const c_char;
    info.library_version = LIBRARY_VERSION.as_ptr() as *const c_char;
    info.valid_extensions = VALID_EXTENSIONS.as_ptr() as *const c_char;
    info.need_fullpath = false;
    info.block_extract = false;
}

#[no_mangle]
pub unsafe extern "C" fn retro_get_system_av_info(info: *mut sys::SystemAvInfo) {
    let info = &mut *info;
    info.timing.fps = FRAME_RATE;
    info.timing.sample_rate = SAMPLE_RATE;
    info.geometry.base_width = WINDOW_WIDTH;
    info.geometry.base_height = WINDOW_HEIGHT;
    info.geometry.max_width = WINDOW_WIDTH;
    info.geometry.max_height = WINDOW_HEIGHT;
    info.geometry.aspect_ratio = WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32;
}

#[no_mangle]
pub unsafe extern "C" fn retro_set_environment(cb: sys::EnvironmentFn) {
    // The core has no variables; register the empty list so frontends that
    // expect the call still see it.
    let no_variables = sys::Variable {
        key: ptr::null(),
        value: ptr::null(),
    };
    cb(
        sys::ENVIRONMENT_SET_VARIABLES,
        &no_variables as *const sys::Variable as *mut c_void,
    );

    let no_content = true;
    cb(
        sys::ENVIRONMENT_SET_SUPPORT_NO_GAME,
        &no_content as *const bool as *mut c_void,
    );

    let pixel_format = sys::PixelFormat::ARGB8888;
    cb(
        sys::ENVIRONMENT_SET_PIXEL_FORMAT,
        &pixel_format as *const sys::PixelFormat as *mut c_void,
    );

    let mut log_interface = MaybeUninit::<sys::LogCallback>::uninit();
    if cb(
        sys::ENVIRONMENT_GET_LOG_INTERFACE,
        log_interface.as_mut_ptr() as *mut c_void,
    ) {
        crate::logger::init(Some(log_interface.assume_init().log));
    } else {
        crate::logger::init(None);
    }
}

#[no_mangle]
pub unsafe extern "C" fn retro_set_video_refresh(cb: sys::VideoRefreshFn) {
    VIDEO_REFRESH_CB = Some(cb);
}

#[no_mangle]
pub unsafe extern "C" fn retro_set_audio_sample(cb: sys::AudioSampleFn) {
    AUDIO_SAMPLE_CB = Some(cb);
}

#[no_mangle]
pub unsafe extern "C" fn retro_set_audio_sample_batch(cb: sys::AudioSampleBatchFn) {
    AUDIO_SAMPLE_BATCH_CB = Some(cb);
}

#[no_mangle]
pub unsafe extern "C" fn retro_set_input_poll(cb: sys::InputPollFn) {
    INPUT_POLL_CB = Some(cb);
}

#[no_mangle]
pub unsafe extern "C" fn retro_set_input_state(cb: sys::InputStateFn) {
    INPUT_STATE_CB = Some(cb);
}

#[no_mangle]
pub unsafe extern "C" fn retro_run() {
    let (Some(poll), Some(state)) = (INPUT_POLL_CB, INPUT_STATE_CB) else {
        log::warn!("retro_run before input callbacks were registered");
        return;
    };
    if CORE.is_null() {
        return;
    }

    let mut host = FrontendHost {
        poll,
        state,
        video: VIDEO_REFRESH_CB,
    };
    (*CORE).run_frame(&mut host);

    thread::sleep(FRAME_YIELD);
}

#[no_mangle]
pub unsafe extern "C" fn retro_load_game(_info: *const sys::GameInfo) -> bool {
    check_variables();
    true
}

#[no_mangle]
pub unsafe extern "C" fn retro_load_game_special(
    _game_type: c_uint,
    _info: *const sys::GameInfo,
    _num_info: size_t,
) -> bool {
    false
}

#[no_mangle]
pub extern "C" fn retro_unload_game() {}

#[no_mangle]
pub extern "C" fn retro_reset() {}

#[no_mangle]
pub extern "C" fn retro_get_region() -> c_uint {
    sys::Region::NTSC.to_uint()
}

#[no_mangle]
pub extern "C" fn retro_serialize_size() -> size_t {
    0
}

#[no_mangle]
pub unsafe extern "C" fn retro_serialize(_data: *mut c_void, _size: size_t) -> bool {
    false
}

#[no_mangle]
pub unsafe extern "C" fn retro_unserialize(_data: *const c_void, _size: size_t) -> bool {
    false
}

#[no_mangle]
pub extern "C" fn retro_get_memory_data(_id: c_uint) -> *mut c_void {
    ptr::null_mut()
}

#[no_mangle]
pub extern "C" fn retro_get_memory_size(_id: c_uint) -> size_t {
    0
}

#[no_mangle]
pub extern "C" fn retro_cheat_reset() {}

#[no_mangle]
pub unsafe extern "C" fn retro_cheat_set(_index: c_uint, _enabled: bool, _code: *const c_char) {}

#[no_mangle]
pub extern "C" fn retro_set_controller_port_device(_port: c_uint, _device: c_uint) {}
