use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory that relative image paths are resolved against
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Optional TOML file replacing the built-in content
    #[serde(default)]
    pub content_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            assets_dir: default_assets_dir(),
            content_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Capture mouse wheel and pointer movement
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            mouse: default_true(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve used for animated scroll commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth (inertial and animated) scrolling
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Fraction of the remaining distance covered each frame (lerp)
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    /// Multiplier applied to wheel and key scroll deltas
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Duration of animated `scroll_to` commands
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Frame rate while an animation is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Preset easing used when no bezier curve is configured
    #[serde(default)]
    pub easing: EasingType,
    /// Rows scrolled per line step before the multiplier is applied
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Offset applied to navigation targets (negative keeps rows free above the target)
    #[serde(default)]
    pub nav_offset: i32,
    /// Cubic bezier control points for navigation scrolls
    #[serde(default = "default_nav_bezier")]
    pub nav_bezier: Option<[f64; 4]>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            smoothing: default_smoothing(),
            multiplier: default_multiplier(),
            animation_duration_ms: default_animation_duration(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            nav_offset: 0,
            nav_bezier: default_nav_bezier(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Phrases cycled in the hero section
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,
    /// Delay between revealed characters
    #[serde(default = "default_char_delay")]
    pub char_delay_ms: u64,
    /// Dwell time once a phrase is fully typed
    #[serde(default = "default_pause")]
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            char_delay_ms: default_char_delay(),
            pause_ms: default_pause(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "violet", "dracula")
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

// Accept either a bare theme name or a table with `name` and `colors`
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
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
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
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
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
    "violet".to_string()
}

/// Optional color overrides, each a hex string ("#8b5cf6" or "8b5cf6")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg0: Option<String>,
    /// Card background
    pub bg1: Option<String>,
    /// Raised surfaces (nav bar, modal)
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground
    pub fg1: Option<String>,
    /// Primary accent (links, progress bar)
    pub accent: Option<String>,
    /// Secondary accent (gradient text)
    pub accent_alt: Option<String>,
    /// Focused link background
    pub focus: Option<String>,
    /// Muted text
    pub muted: Option<String>,
    /// Error/placeholder color
    pub error: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>", "<Esc>", "gg"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Focus next link on the page
    #[serde(default = "default_key_next_link")]
    pub next_link: String,
    /// Focus previous link on the page
    #[serde(default = "default_key_prev_link")]
    pub prev_link: String,
    /// Activate the focused link
    #[serde(default = "default_key_activate")]
    pub activate: String,
    /// Cycle the project category filter
    #[serde(default = "default_key_cycle_filter")]
    pub cycle_filter: String,
    #[serde(default = "default_key_toggle_language")]
    pub toggle_language: String,
    /// Open/close the collapsed navigation menu
    #[serde(default = "default_key_toggle_menu")]
    pub toggle_menu: String,
    #[serde(default = "default_key_help")]
    pub help: String,
    /// One key per navigation link, in nav order
    #[serde(default = "default_key_jump_to_nav")]
    pub jump_to_nav: Vec<String>,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_link: default_key_next_link(),
            prev_link: default_key_prev_link(),
            activate: default_key_activate(),
            cycle_filter: default_key_cycle_filter(),
            toggle_language: default_key_toggle_language(),
            toggle_menu: default_key_toggle_menu(),
            help: default_key_help(),
            jump_to_nav: default_key_jump_to_nav(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_jump_to_nav() -> Vec<String> {
    ["1", "2", "3", "4", "5"].iter().map(|k| k.to_string()).collect()
}
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_link() -> String { "<Tab>".to_string() }
fn default_key_prev_link() -> String { "<S-Tab>".to_string() }
fn default_key_activate() -> String { "<CR>".to_string() }
fn default_key_cycle_filter() -> String { "f".to_string() }
fn default_key_toggle_language() -> String { "L".to_string() }
fn default_key_toggle_menu() -> String { "m".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
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

fn default_smoothing() -> f64 {
    0.1
}

fn default_multiplier() -> f64 {
    0.7
}

fn default_animation_duration() -> u64 {
    800
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    3
}

fn default_nav_bezier() -> Option<[f64; 4]> {
    Some([0.25, 0.0, 0.35, 1.0])
}

fn default_phrases() -> Vec<String> {
    vec![
        "3D DESIGNER".to_string(),
        "WEB DEVELOPER".to_string(),
        "CREATIVE DESIGNER".to_string(),
    ]
}

fn default_char_delay() -> u64 {
    100
}

fn default_pause() -> u64 {
    2000
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults when the file is absent
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Always ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    pub fn assets_dir(&self) -> PathBuf {
        expand_tilde(&self.general.assets_dir)
    }

    /// Resolve an asset reference against the assets directory
    pub fn asset_path(&self, asset: &str) -> PathBuf {
        let path = expand_tilde(Path::new(asset));
        if path.is_absolute() {
            path
        } else {
            self.assets_dir().join(path)
        }
    }

    pub fn content_file(&self) -> Option<PathBuf> {
        self.general.content_file.as_deref().map(expand_tilde)
    }
}
