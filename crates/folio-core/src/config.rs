use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            motion: MotionConfig::default(),
            effects: EffectsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Path to the portfolio document (TOML). None falls back to the
    /// built-in sample document.
    #[serde(default)]
    pub portfolio_path: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            portfolio_path: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Idle tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the navigation bar
    #[serde(default = "default_true")]
    pub nav_bar: bool,
    /// Show the status bar
    #[serde(default = "default_true")]
    pub status_bar: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            nav_bar: default_true(),
            status_bar: default_true(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "midnight", "paper")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter
                    .write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Primary background
    pub bg0: Option<String>,
    /// Secondary background (nav bar, cards)
    pub bg1: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground (dimmed text)
    pub fg1: Option<String>,
    /// Accent color (links, markers, trail particles)
    pub accent: Option<String>,
    /// Glow color for the contact card
    pub glow: Option<String>,
}

/// Easing curve selection for animated values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    /// No interpolation, jump at completion
    None,
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

/// Scroll and navigation motion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Animate scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve for scroll animations
    #[serde(default = "default_easing")]
    pub easing: EasingKind,
    /// Lines per scroll step when smooth scrolling is disabled
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while animations are active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
    /// Rows reserved above an anchor target when scrolling to a section
    #[serde(default = "default_nav_offset")]
    pub nav_offset: u16,
    /// Scroll offset past which the nav bar gains its shadow
    #[serde(default = "default_nav_shadow_after")]
    pub nav_shadow_after: u16,
    /// Scroll offset past which downward scrolling hides the nav bar
    #[serde(default = "default_nav_hide_after")]
    pub nav_hide_after: u16,
    /// Look-ahead rows when deciding which section is active
    #[serde(default = "default_section_lookahead")]
    pub section_lookahead: u16,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: default_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
            nav_offset: default_nav_offset(),
            nav_shadow_after: default_nav_shadow_after(),
            nav_hide_after: default_nav_hide_after(),
            section_lookahead: default_section_lookahead(),
        }
    }
}

/// Toggles and limits for the decorative effect catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// Reveal blocks as they scroll into view
    #[serde(default = "default_true")]
    pub reveal: bool,
    /// Animate stat counters on first visibility
    #[serde(default = "default_true")]
    pub counters: bool,
    /// Type out the hero code sample on first visibility
    #[serde(default = "default_true")]
    pub typewriter: bool,
    /// Offset decorative orbs with the pointer
    #[serde(default = "default_true")]
    pub parallax: bool,
    /// Pointer hover interactions (tags, cards, buttons, glow)
    #[serde(default = "default_true")]
    pub hover: bool,
    /// Cursor trail particle overlay
    #[serde(default)]
    pub cursor_trail: bool,
    /// Preloader overlay on startup
    #[serde(default)]
    pub preloader: bool,
    /// Upper bound on live trail particles, oldest evicted first
    #[serde(default = "default_max_trail_particles")]
    pub max_trail_particles: usize,
    /// Parallax strength in columns per orb index
    #[serde(default = "default_parallax_strength")]
    pub parallax_strength: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            reveal: default_true(),
            counters: default_true(),
            typewriter: default_true(),
            parallax: default_true(),
            hover: default_true(),
            cursor_trail: false,
            preloader: false,
            max_trail_particles: default_max_trail_particles(),
            parallax_strength: default_parallax_strength(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    450
}

fn default_easing() -> EasingKind {
    EasingKind::Cubic
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u16 {
    60
}

fn default_nav_offset() -> u16 {
    4
}

fn default_nav_shadow_after() -> u16 {
    5
}

fn default_nav_hide_after() -> u16 {
    20
}

fn default_section_lookahead() -> u16 {
    8
}

fn default_max_trail_particles() -> usize {
    160
}

fn default_parallax_strength() -> f32 {
    2.0
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.motion.smooth_enabled);
        assert_eq!(config.motion.animation_duration_ms, 450);
        assert_eq!(config.motion.easing, EasingKind::Cubic);
        assert_eq!(config.motion.animation_fps, 60);
        // Cursor trail and preloader ship disabled
        assert!(!config.effects.cursor_trail);
        assert!(!config.effects.preloader);
        assert!(config.effects.reveal);
        assert!(config.effects.counters);
        assert!(config.effects.typewriter);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.motion.nav_shadow_after, config.motion.nav_shadow_after);
        assert_eq!(parsed.effects.max_trail_particles, config.effects.max_trail_particles);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
            [motion]
            nav_hide_after = 200
            nav_shadow_after = 50
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.motion.nav_hide_after, 200);
        assert_eq!(config.motion.nav_shadow_after, 50);
        // Untouched sections keep defaults
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(!config.effects.cursor_trail);
    }

    #[test]
    fn test_theme_as_string() {
        let toml_str = r#"
            [ui]
            theme = "paper"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.theme.name, "paper");
        assert!(config.ui.theme.colors.accent.is_none());
    }

    #[test]
    fn test_theme_with_overrides() {
        let toml_str = r##"
            [ui.theme]
            name = "midnight"
            colors = { accent = "#0071e3" }
        "##;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.theme.name, "midnight");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#0071e3"));
    }

    #[test]
    fn test_easing_kind_names() {
        let toml_str = r#"
            [motion]
            easing = "ease_out"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.motion.easing, EasingKind::EaseOut);
    }
}
