//! Host capability seam.
//!
//! Everything the core needs from the frontend during a frame is expressed as
//! this one trait, so the frame path can be driven by the real libretro
//! callbacks (see `ffi`) or by a scripted fake in tests. The core never holds
//! raw C function pointers.

/// The per-frame capabilities a libretro frontend provides.
///
/// All three calls are assumed total: polling and presentation cannot fail,
/// and a state query always returns a value (possibly `0`).
pub trait Host {
    /// Asks the frontend to refresh its view of input devices for this frame.
    fn poll_input(&mut self);

    /// Queries the current state of one `(port, device, index, id)` slot.
    fn input_state(&mut self, port: u32, device: u32, index: u32, id: u32) -> i16;

    /// Hands a finished XRGB8888 frame to the frontend.
    ///
    /// `pitch` is the stride of one row in bytes.
    fn present_frame(&mut self, pixels: &[u32], width: u32, height: u32, pitch: usize);
}
