//! Hardware abstraction for LED strip devices.

use crate::layout::ChannelLayout;

/// Trait for abstracting LED strip hardware.
///
/// Implement this for your strip device (bit-banged GPIO, PIO, SPI, a
/// vendor driver, ...) to let [`Strip`](crate::Strip) and
/// [`MultiStrip`](crate::MultiStrip) address it. The driver owns the raw
/// pixel buffer and knows how to push it onto the wire; everything above it
/// only rearranges bytes inside that buffer.
///
/// Handle any hardware errors internally - these methods cannot fail.
pub trait StripDriver {
    /// Number of pixels on this device.
    fn len(&self) -> usize;

    /// Returns true if the device has no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The device's channel layout, fixed by its wiring order.
    fn layout(&self) -> ChannelLayout;

    /// The raw pixel buffer in device byte order.
    ///
    /// Must be exactly `len() * layout().bytes_per_pixel()` bytes long, with
    /// pixel `i` starting at byte `i * bytes_per_pixel`.
    fn buffer_mut(&mut self) -> &mut [u8];

    /// Prepares the device for output. Blocking.
    fn begin(&mut self);

    /// Pushes the current buffer contents to the hardware. Blocking, with
    /// bounded latency.
    fn show(&mut self);

    /// Zeroes the pixel buffer.
    fn clear(&mut self) {
        self.buffer_mut().fill(0);
    }
}
