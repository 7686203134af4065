use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,

    // Palette colors
    pub accent: Color,
    pub glow: Color,
    pub orb_a: Color,
    pub orb_b: Color,
    pub orb_c: Color,

    // Code window tag colors
    pub code_kw: Color,
    pub code_str: Color,
    pub code_fn: Color,
    pub code_cmt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    /// Default dark palette
    pub fn midnight() -> Self {
        Self {
            bg0: Color::Rgb(0x0d, 0x0d, 0x12),
            bg1: Color::Rgb(0x1a, 0x1a, 0x22),
            fg0: Color::Rgb(0xe8, 0xe8, 0xed),
            fg1: Color::Rgb(0x8e, 0x8e, 0x99),
            accent: Color::Rgb(0x00, 0x71, 0xe3),
            glow: Color::Rgb(0x00, 0x44, 0x88),
            orb_a: Color::Rgb(0x00, 0x71, 0xe3),
            orb_b: Color::Rgb(0xbf, 0x5a, 0xf2),
            orb_c: Color::Rgb(0xff, 0x37, 0x5f),
            code_kw: Color::Rgb(0xbf, 0x5a, 0xf2),
            code_str: Color::Rgb(0xa9, 0xb6, 0x65),
            code_fn: Color::Rgb(0x7d, 0xae, 0xa3),
            code_cmt: Color::Rgb(0x6c, 0x6c, 0x77),
        }
    }

    /// Light palette
    pub fn paper() -> Self {
        Self {
            bg0: Color::Rgb(0xf5, 0xf5, 0xf0),
            bg1: Color::Rgb(0xe8, 0xe6, 0xdd),
            fg0: Color::Rgb(0x22, 0x22, 0x26),
            fg1: Color::Rgb(0x6e, 0x6e, 0x78),
            accent: Color::Rgb(0x00, 0x5f, 0xcc),
            glow: Color::Rgb(0xbf, 0xd7, 0xf2),
            orb_a: Color::Rgb(0x00, 0x5f, 0xcc),
            orb_b: Color::Rgb(0x9a, 0x3f, 0xd4),
            orb_c: Color::Rgb(0xd6, 0x2b, 0x4e),
            code_kw: Color::Rgb(0x9a, 0x3f, 0xd4),
            code_str: Color::Rgb(0x5a, 0x79, 0x21),
            code_fn: Color::Rgb(0x2a, 0x7a, 0x6b),
            code_cmt: Color::Rgb(0x9a, 0x9a, 0xa2),
        }
    }

    /// Linearly blend two colors; non-RGB colors return `b` unchanged.
    ///
    /// This is how "opacity" is expressed on a terminal: text fading in is a
    /// blend from the background toward the foreground.
    pub fn blend(a: Color, b: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        match (a, b) {
            (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => Color::Rgb(
                lerp_channel(ar, br, t),
                lerp_channel(ag, bg, t),
                lerp_channel(ab, bb, t),
            ),
            _ => b,
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u8
}

/// Resolve the configured theme name and apply color overrides
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let mut theme = match config.name.as_str() {
        "midnight" => Theme::midnight(),
        "paper" => Theme::paper(),
        other => {
            warn!("unknown theme '{}', falling back to midnight", other);
            Theme::midnight()
        }
    };
    apply_overrides(&mut theme, &config.colors);
    theme
}

fn apply_overrides(theme: &mut Theme, overrides: &ThemeColorOverrides) {
    let mut apply = |slot: &mut Color, value: &Option<String>, name: &str| {
        if let Some(hex) = value {
            match parse_hex(hex) {
                Some(color) => *slot = color,
                None => warn!("invalid hex color '{}' for {}", hex, name),
            }
        }
    };
    apply(&mut theme.bg0, &overrides.bg0, "bg0");
    apply(&mut theme.bg1, &overrides.bg1, "bg1");
    apply(&mut theme.fg0, &overrides.fg0, "fg0");
    apply(&mut theme.fg1, &overrides.fg1, "fg1");
    apply(&mut theme.accent, &overrides.accent, "accent");
    apply(&mut theme.glow, &overrides.glow, "glow");
}

/// Parse "#rrggbb" or "rrggbb"
fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#0071e3"), Some(Color::Rgb(0x00, 0x71, 0xe3)));
        assert_eq!(parse_hex("ffffff"), Some(Color::Rgb(0xff, 0xff, 0xff)));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("nothex"), None);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(100, 200, 50);
        assert_eq!(Theme::blend(a, b, 0.0), a);
        assert_eq!(Theme::blend(a, b, 1.0), b);
        assert_eq!(Theme::blend(a, b, 0.5), Color::Rgb(50, 100, 25));
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "midnight".into(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".into()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(0xff, 0x00, 0x00));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "does-not-exist".into(),
            colors: ThemeColorOverrides::default(),
        };
        let theme = load_theme(&config);
        assert_eq!(theme.bg0, Theme::midnight().bg0);
    }
}
