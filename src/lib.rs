#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`StripDriver`**: Trait to implement for your LED strip hardware; owns the pixel buffer
//! - **`ChannelLayout`**: Byte order of the R/G/B/(W) channels within one pixel slot
//! - **`Strip`**: Wraps one driver and resolves per-strip directional reversal
//! - **`MultiStrip`**: Addresses several strips as one contiguous virtual pixel range
//! - **`PixelSlot`**: One entry of the composite's virtual address table
//! - **`Effect`**: One `update()` per animation tick; `Blink`, `Runner` and `ColorChanger` implement it
//!
//! The library uses `RGB8` (8-bit channels) for all color operations and writes
//! channel bytes straight into each device's buffer. The white channel of RGBW
//! devices travels as a separate byte alongside the RGB triple.

// Re-export RGB8 from smart-leds for user convenience
pub use smart_leds::RGB8;

pub mod colors;
pub mod driver;
pub mod effects;
pub mod layout;
pub mod multi;
pub mod strip;

pub use colors::{BLACK, BLUE, GREEN, RED, WHITE};
pub use driver::StripDriver;
pub use effects::{
    Blink, BlinkConfig, ColorChanger, ColorChangerConfig, Effect, Runner, RunnerConfig,
};
pub use layout::{ChannelLayout, LayoutError};
pub use multi::{MultiStrip, PixelSlot};
pub use strip::Strip;
