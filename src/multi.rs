//! Multi-strip composite exposing one flattened virtual index space.
//!
//! Provides [`MultiStrip`] which owns an ordered set of [`Strip`] adapters
//! and addresses all of their pixels through a single contiguous index
//! space. A slot table maps each virtual index to the strip and physical
//! pixel it lands on, with per-strip inversion already resolved, so callers
//! above the composite never see device boundaries or wiring direction.

use crate::colors;
use crate::driver::StripDriver;
use crate::layout::ChannelLayout;
use crate::strip::Strip;
use heapless::Vec;
use smart_leds::RGB8;

/// One entry of the composite's address table: the physical pixel a virtual
/// index resolves to, as a (strip, pixel) pair resolved against the strip
/// set at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelSlot {
    /// Position of the owning strip in the composite's strip set.
    pub strip: u8,
    /// Physical pixel index within that strip's buffer, inversion already
    /// applied.
    pub index: u16,
}

/// Addresses several strips as one contiguous run of pixels.
///
/// Virtual indices run through the strips in the order they were added:
/// the first strip's pixels come first, then the second's, and so on. Each
/// strip's inversion is baked into the table at build time.
///
/// The composite adopts the channel layout of its first strip and uses it
/// for every pixel write; composing devices with different layouts is not
/// detected and produces wrong colors on the mismatched devices.
///
/// # Type Parameters
/// * `D` - Strip driver implementation type
/// * `STRIPS` - Maximum number of strips (at most 256)
/// * `PIXELS` - Maximum total pixel count (at most 65536 per strip)
///
/// If the strip set holds more pixels than `PIXELS`, the table cannot be
/// built: the composite degrades to `len() == 0` and every pixel operation
/// becomes a no-op until it is reconfigured with a smaller strip set.
pub struct MultiStrip<D: StripDriver, const STRIPS: usize, const PIXELS: usize> {
    strips: Vec<Strip<D>, STRIPS>,
    slots: Vec<PixelSlot, PIXELS>,
    layout: ChannelLayout,
}

impl<D: StripDriver, const STRIPS: usize, const PIXELS: usize> MultiStrip<D, STRIPS, PIXELS> {
    /// Creates a composite over the given strips and builds its table.
    pub fn new(strips: Vec<Strip<D>, STRIPS>) -> Self {
        let mut multi = Self {
            strips,
            slots: Vec::new(),
            layout: ChannelLayout::GRB,
        };
        multi.rebuild();
        multi
    }

    /// Replaces the strip set and rebuilds the table.
    ///
    /// The previous table is released before the new one is built. Must
    /// complete before any pixel operation is issued against the new
    /// configuration; the exclusive borrow enforces this.
    pub fn set_strips(&mut self, strips: Vec<Strip<D>, STRIPS>) {
        self.strips = strips;
        self.rebuild();
    }

    /// Rebuilds the slot table from the current strip set.
    ///
    /// Walks strips in order and virtual indices within each, resolving
    /// every index through that strip's inversion rule. This is the one
    /// place inversion enters the flattened space. Any entry that cannot
    /// be represented empties the table, leaving a composite that renders
    /// nothing rather than one that aliases pixels.
    fn rebuild(&mut self) {
        self.slots.clear();
        self.layout = self.strips.first().map_or(ChannelLayout::GRB, Strip::layout);

        for (strip_index, strip) in self.strips.iter().enumerate() {
            let Ok(strip_id) = u8::try_from(strip_index) else {
                self.slots.clear();
                return;
            };
            for virtual_index in 0..strip.len() {
                let Ok(physical) = u16::try_from(strip.physical_index(virtual_index)) else {
                    self.slots.clear();
                    return;
                };
                let slot = PixelSlot {
                    strip: strip_id,
                    index: physical,
                };
                if self.slots.push(slot).is_err() {
                    self.slots.clear();
                    return;
                }
            }
        }
    }

    /// Total number of addressable pixels.
    ///
    /// 0 when the table could not be built; every pixel operation is then a
    /// no-op.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the composite addresses no pixels.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The channel layout adopted from the first strip.
    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// Returns true if the adopted layout has no white channel.
    pub fn is_rgb(&self) -> bool {
        self.layout.is_rgb()
    }

    /// Number of strips in the composite.
    pub fn strip_count(&self) -> usize {
        self.strips.len()
    }

    /// The strips in composite order.
    pub fn strips(&self) -> &[Strip<D>] {
        &self.strips
    }

    /// Read-only view of the virtual address table.
    pub fn slots(&self) -> &[PixelSlot] {
        &self.slots
    }

    /// Consumes the composite and returns its strips.
    pub fn into_strips(self) -> Vec<Strip<D>, STRIPS> {
        self.strips
    }

    /// Sets the color of the pixel at virtual index `n`.
    ///
    /// On RGBW devices the white channel is written as 0.
    ///
    /// # Panics
    /// Panics if `n >= len()`. Presenting valid indices is the caller's
    /// job; out-of-range indices are not silently dropped.
    pub fn set_pixel(&mut self, n: usize, color: RGB8) {
        let slot = self.slots[n];
        self.write(slot, color, 0);
    }

    /// Sets the color and white channel of the pixel at virtual index `n`.
    ///
    /// The white value is ignored if the adopted layout is RGB-only.
    ///
    /// # Panics
    /// Panics if `n >= len()`.
    pub fn set_pixel_rgbw(&mut self, n: usize, color: RGB8, white: u8) {
        let slot = self.slots[n];
        self.write(slot, color, white);
    }

    /// Sets the pixel at virtual index `n` from a packed `0x00RRGGBB` color.
    ///
    /// # Panics
    /// Panics if `n >= len()`.
    pub fn set_pixel_packed(&mut self, n: usize, packed: u32) {
        self.set_pixel(n, colors::from_packed(packed));
    }

    /// Writes one pixel through the adopted layout.
    fn write(&mut self, slot: PixelSlot, color: RGB8, white: u8) {
        let layout = self.layout;
        let base = slot.index as usize * layout.bytes_per_pixel();
        let buffer = self.strips[slot.strip as usize].driver_mut().buffer_mut();
        buffer[base + layout.red_offset()] = color.r;
        buffer[base + layout.green_offset()] = color.g;
        buffer[base + layout.blue_offset()] = color.b;
        if !layout.is_rgb() {
            buffer[base + layout.white_offset()] = white;
        }
    }

    /// Fills every pixel in the composite with `color`.
    pub fn fill(&mut self, color: RGB8) {
        for n in 0..self.len() {
            self.set_pixel(n, color);
        }
    }

    /// Fills the composite with `color` from virtual index `start` to the
    /// end. A negative `start` clamps to 0.
    pub fn fill_from(&mut self, color: RGB8, start: i32) {
        let count = (self.len() as i64 - start as i64).max(0) as usize;
        self.fill_range(color, start, count);
    }

    /// Fills `count` pixels with `color` starting at virtual index `start`.
    ///
    /// `start` clamps to 0 and the effective end (`start + count`, computed
    /// before the clamp) caps at `len()`; a start at or past the end, or a
    /// zero count, is a no-op.
    pub fn fill_range(&mut self, color: RGB8, start: i32, count: usize) {
        let end = (start as i64 + count as i64).min(self.len() as i64);
        for i in (start as i64).max(0)..end {
            self.set_pixel(i as usize, color);
        }
    }

    /// Prepares every strip for output, in composite order.
    pub fn begin(&mut self) {
        for strip in &mut self.strips {
            strip.begin();
        }
    }

    /// Pushes every strip's buffer to its hardware, in composite order.
    pub fn show(&mut self) {
        for strip in &mut self.strips {
            strip.show();
        }
    }

    /// Sets every virtual pixel to zero, white channel included.
    ///
    /// Goes pixel-by-pixel through the inversion-resolved table rather than
    /// zeroing device buffers, so clearing stays position-exact across strip
    /// boundaries during reconfiguration. Note the asymmetry with
    /// [`Strip::fill`], which floods the device buffer in physical order.
    pub fn clear(&mut self) {
        for n in 0..self.len() {
            self.set_pixel(n, colors::BLACK);
        }
    }
}
