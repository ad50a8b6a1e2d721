//! Shared test infrastructure for multistrip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use multistrip::{ChannelLayout, StripDriver};

// ============================================================================
// Mock Strip Driver
// ============================================================================

/// Mock strip driver backed by an in-memory byte buffer.
///
/// Records lifecycle calls so tests can assert fan-out behavior.
pub struct MockDriver {
    count: usize,
    layout: ChannelLayout,
    buffer: heapless::Vec<u8, 256>,
    pub begin_calls: usize,
    pub show_calls: usize,
}

impl MockDriver {
    pub fn new(count: usize, layout: ChannelLayout) -> Self {
        let mut buffer = heapless::Vec::new();
        for _ in 0..count * layout.bytes_per_pixel() {
            buffer.push(0).expect("mock buffer capacity");
        }
        Self {
            count,
            layout,
            buffer,
            begin_calls: 0,
            show_calls: 0,
        }
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The bytes of physical pixel `index`.
    pub fn pixel(&self, index: usize) -> &[u8] {
        let stride = self.layout.bytes_per_pixel();
        &self.buffer[index * stride..(index + 1) * stride]
    }

    /// The (r, g, b) values of physical pixel `index`, read back through the
    /// driver's own layout.
    pub fn rgb_at(&self, index: usize) -> (u8, u8, u8) {
        let slot = self.pixel(index);
        (
            slot[self.layout.red_offset()],
            slot[self.layout.green_offset()],
            slot[self.layout.blue_offset()],
        )
    }

    pub fn is_dark(&self) -> bool {
        self.buffer.iter().all(|&byte| byte == 0)
    }
}

impl StripDriver for MockDriver {
    fn len(&self) -> usize {
        self.count
    }

    fn layout(&self) -> ChannelLayout {
        self.layout
    }

    fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn begin(&mut self) {
        self.begin_calls += 1;
    }

    fn show(&mut self) {
        self.show_calls += 1;
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use multistrip::{BLACK, BLUE, GREEN, RED, WHITE};
