//! Integration tests for colors module

use multistrip::RGB8;
use multistrip::colors;

#[test]
fn packed_colors_unpack_by_channel() {
    assert_eq!(colors::from_packed(0x00FF_0000), colors::RED);
    assert_eq!(colors::from_packed(0x0000_FF00), colors::GREEN);
    assert_eq!(colors::from_packed(0x0000_00FF), colors::BLUE);
    assert_eq!(colors::from_packed(0x00AA_BBCC), RGB8::new(0xAA, 0xBB, 0xCC));
}

#[test]
fn packing_is_the_inverse_of_unpacking() {
    for packed in [0u32, 0x00FF_FFFF, 0x0012_3456, 0x00A0_0B0C] {
        assert_eq!(colors::to_packed(colors::from_packed(packed)), packed);
    }
}

#[test]
fn upper_packed_byte_is_discarded() {
    assert_eq!(colors::from_packed(0xFF12_3456), colors::from_packed(0x0012_3456));
}

#[test]
fn scaling_runs_from_black_to_just_under_identity() {
    let color = RGB8::new(200, 100, 50);

    assert_eq!(colors::scaled(color, 0), colors::BLACK);
    assert_eq!(colors::scaled(color, 128), RGB8::new(100, 50, 25));
    assert_eq!(colors::scaled(color, 255), RGB8::new(199, 99, 49));
}

#[test]
fn constants_cover_the_primaries() {
    assert_eq!(colors::to_packed(colors::WHITE), 0x00FF_FFFF);
    assert_eq!(colors::to_packed(colors::BLACK), 0);
    assert_eq!(colors::RED, RGB8::new(255, 0, 0));
}
