use ratatui::style::Color;

use crate::constants::DEFAULT_CATEGORY_COLOR;

/// Parse a "#rrggbb" hex string into channels.
#[must_use]
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert a category hex color to a terminal color, falling back to the
/// default palette blue for anything unparseable.
#[must_use]
pub fn to_terminal_color(color: &str) -> Color {
    match parse_hex(color) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => to_terminal_color(DEFAULT_CATEGORY_COLOR),
    }
}

/// Blend a hex color toward white (or black when `darken`) by `amount` in
/// `[0, 1]`, returning hex. Used for hover fades and derived border colors.
#[must_use]
pub fn fade(color: &str, amount: f32, darken: bool) -> String {
    let (r, g, b) = parse_hex(color)
        .or_else(|| parse_hex(DEFAULT_CATEGORY_COLOR))
        .unwrap_or((0x41, 0x80, 0xff));
    let amount = amount.clamp(0.0, 1.0);
    let target = if darken { 0.0 } else { 255.0 };
    let blend = |c: u8| -> u8 { (f32::from(c) + (target - f32::from(c)) * amount).round() as u8 };
    format!("#{:02x}{:02x}{:02x}", blend(r), blend(g), blend(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#9e4894"), Some((0x9e, 0x48, 0x94)));
        assert_eq!(parse_hex("9e4894"), None);
        assert_eq!(parse_hex("#9e48"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_to_terminal_color_falls_back_on_garbage() {
        assert_eq!(to_terminal_color("#ff2f92"), Color::Rgb(0xff, 0x2f, 0x92));
        assert_eq!(
            to_terminal_color("not-a-color"),
            to_terminal_color(DEFAULT_CATEGORY_COLOR)
        );
    }

    #[test]
    fn test_fade_toward_white_and_black() {
        assert_eq!(fade("#000000", 1.0, false), "#ffffff");
        assert_eq!(fade("#ffffff", 1.0, true), "#000000");
        assert_eq!(fade("#808080", 0.0, false), "#808080");
        // Halfway between 0x80 and 0xff
        assert_eq!(fade("#808080", 0.5, false), "#c0c0c0");
    }
}
