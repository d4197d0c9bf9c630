use super::ColorParseError;

/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// `Default` is fully transparent, which is also what a gradient view uses for
/// a colour that was never set.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (straight alpha). The `#` is optional.
    pub fn from_hex(literal: &str) -> Result<Self, ColorParseError> {
        let hex = literal.trim().strip_prefix('#').unwrap_or(literal.trim());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(literal, "expected only hex digits"));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::new(
                literal,
                format!("expected 6 or 8 hex digits, got {}", hex.len()),
            ));
        }

        // All characters are ASCII hex digits, so byte slicing is on char boundaries.
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| ColorParseError::new(literal, e.to_string()))
        };

        let r = channel(0)?;
        let g = channel(2)?;
        let b = channel(4)?;
        let a = if hex.len() == 8 { channel(6)? } else { 0xff };

        Ok(Self::from_srgb_u8(r, g, b, a))
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── from_hex ──────────────────────────────────────────────────────────

    #[test]
    fn hex_rgb_is_opaque() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c.to_array(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn hex_rgba_is_premultiplied() {
        let c = Color::from_hex("ffffff00").unwrap();
        assert_eq!(c, Color::transparent());

        let half = Color::from_hex("#00ff0080").unwrap();
        assert!((half.a - 128.0 / 255.0).abs() < 1e-6);
        assert!((half.g - half.a).abs() < 1e-6);
    }

    #[test]
    fn hex_wrong_length_is_rejected() {
        let err = Color::from_hex("#fff").unwrap_err();
        assert_eq!(err.input, "#fff");
        assert!(err.reason.contains("got 3"));
    }

    #[test]
    fn hex_non_digit_is_rejected() {
        assert!(Color::from_hex("#gg0000").is_err());
        // Multi-byte input must not panic on slicing.
        assert!(Color::from_hex("#ééé").is_err());
    }

    // ── premultiplication ─────────────────────────────────────────────────

    #[test]
    fn straight_input_is_premultiplied_and_clamped() {
        let c = Color::from_straight(0.5, 2.0, -1.0, 0.5);
        assert_eq!(c.to_array(), [0.25, 0.5, 0.0, 0.5]);
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(Color::default(), Color::transparent());
    }
}
