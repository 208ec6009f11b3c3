//! Chart palette and color helpers.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Fixed three-color palette cycled across chart slices and legend chips.
pub const CHART_PALETTE: &[&str] = &["#3B82F6", "#10B981", "#F59E0B"];

/// Palette entry for a slice index, cycling past the palette length.
pub fn slice_color(index: usize) -> &'static str {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    let hex = trimmed.strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// CSS `rgba(...)` string for a hex color at the given opacity.
///
/// Used for tinted legend chips; falls back to an opaque gray when the hex
/// value does not parse.
pub fn rgba(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((107, 114, 128));
    let alpha = alpha.clamp(0.0, 1.0);
    format!("rgba({r}, {g}, {b}, {alpha})")
}
