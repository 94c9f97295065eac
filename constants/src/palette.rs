pub struct PaletteEntry {
    pub hex: &'static str,
    pub name: &'static str,
}

/// Selectable cloud colours, in selection order.
pub const PALETTE: &[PaletteEntry] = &[
    PaletteEntry {
        hex: "#FF6B6B",
        name: "coral",
    },
    PaletteEntry {
        hex: "#4ECDC4",
        name: "turquoise",
    },
    PaletteEntry {
        hex: "#FFE66D",
        name: "amber",
    },
    PaletteEntry {
        hex: "#A78BFA",
        name: "violet",
    },
    PaletteEntry {
        hex: "#F0F",
        name: "magenta",
    },
    PaletteEntry {
        hex: "#00FFFF",
        name: "cyan",
    },
    PaletteEntry {
        hex: "#FFFFFF",
        name: "white",
    },
];

pub const DEFAULT_COLOUR_INDEX: usize = 0;

/// Look up a palette hex string, wrapping past the end.
pub fn palette_hex(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()].hex
}

/// Look up a palette name, wrapping past the end.
pub fn palette_name(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()].name
}

/// Parse `#RGB` or `#RRGGBB` into sRGB components in 0-1.
pub fn parse_hex_colour(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let (r, g, b) = match digits.len() {
        3 => {
            let mut chars = digits.chars();
            let r = chars.next()?.to_digit(16)? as u8;
            let g = chars.next()?.to_digit(16)? as u8;
            let b = chars.next()?.to_digit(16)? as u8;
            (r * 17, g * 17, b * 17)
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            (r, g, b)
        }
        _ => return None,
    };

    Some([
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let rgb = parse_hex_colour("#FF6B6B").unwrap();
        assert!((rgb[0] - 1.0).abs() < 1e-6);
        assert!((rgb[1] - 107.0 / 255.0).abs() < 1e-6);
        assert!((rgb[2] - 107.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parses_three_digit_shorthand() {
        let rgb = parse_hex_colour("#F0F").unwrap();
        assert_eq!(rgb[0], 1.0);
        assert_eq!(rgb[1], 0.0);
        assert_eq!(rgb[2], 1.0);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(parse_hex_colour("#12345").is_none());
        assert!(parse_hex_colour("nonsense").is_none());
    }

    #[test]
    fn every_palette_entry_parses() {
        for entry in PALETTE {
            assert!(
                parse_hex_colour(entry.hex).is_some(),
                "unparseable palette entry {}",
                entry.hex
            );
        }
    }
}
