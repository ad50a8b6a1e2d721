//! Single-strip adapter with directional inversion.
//!
//! Provides [`Strip`] which wraps one [`StripDriver`] and maps a per-device
//! virtual index space onto the device buffer, optionally reversing the
//! physical direction of the strip.

use crate::colors;
use crate::driver::StripDriver;
use crate::layout::ChannelLayout;
use smart_leds::RGB8;

/// Wraps one strip device and adds directional inversion.
///
/// A reversed strip does not change how pixels are stored in the device
/// buffer; it only changes which virtual index maps to which physical
/// index, so that virtual index 0 addresses the far end of the strip.
pub struct Strip<D: StripDriver> {
    driver: D,
    reversed: bool,
}

impl<D: StripDriver> Strip<D> {
    /// Creates an adapter over `driver` in regular order.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            reversed: false,
        }
    }

    /// Creates an adapter over `driver` with the physical direction reversed.
    pub fn reversed(driver: D) -> Self {
        Self {
            driver,
            reversed: true,
        }
    }

    /// Number of pixels on this strip.
    pub fn len(&self) -> usize {
        self.driver.len()
    }

    /// Returns true if the strip has no pixels.
    pub fn is_empty(&self) -> bool {
        self.driver.is_empty()
    }

    /// The device's channel layout.
    pub fn layout(&self) -> ChannelLayout {
        self.driver.layout()
    }

    /// Returns true if the device has no white channel.
    pub fn is_rgb(&self) -> bool {
        self.driver.layout().is_rgb()
    }

    /// Returns whether this strip is reversed.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Sets whether this strip is reversed.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    /// Resolves a virtual index to the physical index used by the device
    /// buffer: `len - 1 - n` on a reversed strip, `n` otherwise.
    pub fn physical_index(&self, n: usize) -> usize {
        if self.reversed { self.len() - 1 - n } else { n }
    }

    /// Sets the color of the pixel at virtual index `n`.
    ///
    /// On RGBW devices the white channel is written as 0.
    ///
    /// # Panics
    /// Panics if `n >= len()`. Indices are not range checked beyond the
    /// buffer bounds; presenting valid indices is the caller's job.
    pub fn set_pixel(&mut self, n: usize, color: RGB8) {
        self.set_pixel_rgbw(n, color, 0);
    }

    /// Sets the color and white channel of the pixel at virtual index `n`.
    ///
    /// The white value is ignored on RGB-only devices.
    ///
    /// # Panics
    /// Panics if `n >= len()`.
    pub fn set_pixel_rgbw(&mut self, n: usize, color: RGB8, white: u8) {
        let layout = self.driver.layout();
        let base = self.physical_index(n) * layout.bytes_per_pixel();
        let buffer = self.driver.buffer_mut();
        buffer[base + layout.red_offset()] = color.r;
        buffer[base + layout.green_offset()] = color.g;
        buffer[base + layout.blue_offset()] = color.b;
        if !layout.is_rgb() {
            buffer[base + layout.white_offset()] = white;
        }
    }

    /// Sets the pixel at virtual index `n` from a packed `0x00RRGGBB` color.
    ///
    /// # Panics
    /// Panics if `n >= len()`.
    pub fn set_pixel_packed(&mut self, n: usize, packed: u32) {
        self.set_pixel(n, colors::from_packed(packed));
    }

    /// Floods the whole strip with `color`.
    ///
    /// Writes the buffer in physical order: a full fill looks identical
    /// whether or not the strip is reversed, so inversion is not resolved
    /// here. The white channel is written as 0 on RGBW devices.
    pub fn fill(&mut self, color: RGB8) {
        let layout = self.driver.layout();
        let count = self.driver.len();
        let stride = layout.bytes_per_pixel();
        let buffer = self.driver.buffer_mut();
        for i in 0..count {
            let base = i * stride;
            buffer[base + layout.red_offset()] = color.r;
            buffer[base + layout.green_offset()] = color.g;
            buffer[base + layout.blue_offset()] = color.b;
            if !layout.is_rgb() {
                buffer[base + layout.white_offset()] = 0;
            }
        }
    }

    /// Fills the strip with `color` from virtual index `start` to the end.
    ///
    /// A negative `start` clamps to 0.
    pub fn fill_from(&mut self, color: RGB8, start: i32) {
        let count = (self.len() as i64 - start as i64).max(0) as usize;
        self.fill_range(color, start, count);
    }

    /// Fills `count` pixels with `color` starting at virtual index `start`.
    ///
    /// The range is resolved per pixel through the inversion rule. `start`
    /// clamps to 0 and the effective end (`start + count`, computed before
    /// the clamp) caps at `len()`; a start at or past the end, or a zero
    /// count, is a no-op.
    pub fn fill_range(&mut self, color: RGB8, start: i32, count: usize) {
        let end = (start as i64 + count as i64).min(self.len() as i64);
        for i in (start as i64).max(0)..end {
            self.set_pixel(i as usize, color);
        }
    }

    /// Prepares the device for output.
    pub fn begin(&mut self) {
        self.driver.begin();
    }

    /// Pushes the device buffer to the hardware.
    pub fn show(&mut self) {
        self.driver.show();
    }

    /// Zeroes the device buffer.
    pub fn clear(&mut self) {
        self.driver.clear();
    }

    /// Access to the wrapped device, e.g. for device-specific configuration.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the wrapped device.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consumes the adapter and returns the wrapped device.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
