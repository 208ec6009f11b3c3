use super::*;

// =============================================================
// Palette cycling
// =============================================================

#[test]
fn slice_color_walks_the_palette_in_order() {
    assert_eq!(slice_color(0), "#3B82F6");
    assert_eq!(slice_color(1), "#10B981");
    assert_eq!(slice_color(2), "#F59E0B");
}

#[test]
fn slice_color_cycles_past_the_palette_length() {
    assert_eq!(slice_color(3), slice_color(0));
    assert_eq!(slice_color(7), slice_color(1));
}

// =============================================================
// Hex parsing
// =============================================================

#[test]
fn parse_hex_rgb_handles_six_digit_values() {
    assert_eq!(parse_hex_rgb("#3B82F6"), Some((0x3B, 0x82, 0xF6)));
}

#[test]
fn parse_hex_rgb_handles_three_digit_values() {
    assert_eq!(parse_hex_rgb("#fff"), Some((255, 255, 255)));
}

#[test]
fn parse_hex_rgb_rejects_malformed_values() {
    assert_eq!(parse_hex_rgb("3B82F6"), None);
    assert_eq!(parse_hex_rgb("#12345"), None);
    assert_eq!(parse_hex_rgb("#zzz"), None);
}

// =============================================================
// rgba tinting
// =============================================================

#[test]
fn rgba_formats_channels_and_alpha() {
    assert_eq!(rgba("#10B981", 0.15), "rgba(16, 185, 129, 0.15)");
}

#[test]
fn rgba_clamps_alpha() {
    assert_eq!(rgba("#10B981", 1.5), "rgba(16, 185, 129, 1)");
}

#[test]
fn rgba_falls_back_to_gray_for_bad_input() {
    assert_eq!(rgba("nope", 0.5), "rgba(107, 114, 128, 0.5)");
}
