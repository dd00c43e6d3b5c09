use chrono::FixedOffset;
use ratatui::style::{Color, Modifier, Style};
use secrecy::SecretString;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use xdg::BaseDirectories;

use crate::formatting::BoxChars;

/// Modifier applied to the selected match card
pub const SELECTION_STYLE_MODIFIER: Modifier = Modifier::BOLD;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    #[serde(deserialize_with = "deserialize_time_zone")]
    pub time_zone: TimeZoneSetting,
    pub use_unicode: bool,
    pub matches_file: Option<PathBuf>,
    pub theme: ThemeConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub accent_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
}

/// `[backend]` table; environment variables take precedence (see `backend::BackendSettings`)
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct BackendConfig {
    pub url: Option<String>,
    pub access_key: Option<SecretString>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            time_zone: TimeZoneSetting::Local,
            use_unicode: true,
            matches_file: None,
            theme: ThemeConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            accent_fg: Color::Rgb(34, 197, 94), // Green
            selection_fg: Color::Rgb(255, 165, 0), // Orange
        }
    }
}

impl Config {
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            use_unicode: self.use_unicode,
            accent_fg: self.theme.accent_fg,
            selection_fg: self.theme.selection_fg,
            box_chars: BoxChars::from_use_unicode(self.use_unicode),
        }
    }
}

/// Time zone used to show match start times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSetting {
    /// The system's local zone
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl FromStr for TimeZoneSetting {
    type Err = String;

    /// Accepts "local", "utc" (or "z"), and offsets like "+02:00" / "-0530"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "local" => return Ok(TimeZoneSetting::Local),
            "utc" | "z" => return Ok(TimeZoneSetting::Utc),
            _ => {}
        }

        let invalid = || format!("Invalid time zone '{}'. Use local, utc or +HH:MM", s);
        let sign = match s.chars().next() {
            Some('+') => 1,
            Some('-') => -1,
            _ => return Err(invalid()),
        };
        let digits: String = s[1..].chars().filter(|c| *c != ':').collect();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let hours: i32 = digits[0..2].parse().map_err(|_| invalid())?;
        let minutes: i32 = digits[2..4].parse().map_err(|_| invalid())?;
        if minutes >= 60 {
            return Err(invalid());
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(TimeZoneSetting::Fixed)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => f.write_str("local"),
            TimeZoneSetting::Utc => f.write_str("utc"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

fn deserialize_time_zone<'de, D>(deserializer: D) -> Result<TimeZoneSetting, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

/// Rendering settings shared by the CLI formatter and the TUI widgets
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    pub accent_fg: Color,
    pub selection_fg: Color,
    pub box_chars: BoxChars,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

impl DisplayConfig {
    pub fn text_style(&self) -> Style {
        Style::default()
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent_fg)
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .add_modifier(SELECTION_STYLE_MODIFIER)
    }
}

/// Deserialize a color from a string (supports named colors, RGB hex, or RGB tuple)
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Parse a color string into a ratatui Color
/// Supports:
/// - Named colors: "red", "green", "cyan", "orange", etc.
/// - Hex colors: "#22C55E", "#2c5"
/// - RGB tuples: "34,197,94"
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "gray" | "grey" => return Some(Color::Gray),
        "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "lightgreen" => return Some(Color::LightGreen),
        "lightblue" => return Some(Color::LightBlue),
        "white" => return Some(Color::White),
        "orange" => return Some(Color::Rgb(255, 165, 0)),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        } else if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    if s.contains(',') {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(Color::Rgb(r, g, b));
        }
    }

    None
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    parse(&content)
}

/// Parse config file content, falling back to defaults when it is invalid
pub fn parse(content: &str) -> Config {
    toml::from_str(content).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid config file: {}", e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("green"), Some(Color::Green));
        assert_eq!(parse_color("orange"), Some(Color::Rgb(255, 165, 0)));
        assert_eq!(parse_color("GREEN"), Some(Color::Green));
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#22C55E"), Some(Color::Rgb(34, 197, 94)));
        assert_eq!(parse_color("#f60"), Some(Color::Rgb(255, 102, 0)));
    }

    #[test]
    fn test_parse_color_rgb_tuple() {
        assert_eq!(parse_color("34, 197, 94"), Some(Color::Rgb(34, 197, 94)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color("#ZZZ"), None);
        assert_eq!(parse_color("256,0,0"), None);
        assert_eq!(parse_color("#é1"), None);
    }

    #[test]
    fn test_time_zone_parse() {
        assert_eq!("local".parse::<TimeZoneSetting>(), Ok(TimeZoneSetting::Local));
        assert_eq!("UTC".parse::<TimeZoneSetting>(), Ok(TimeZoneSetting::Utc));
        assert_eq!(
            "+02:00".parse::<TimeZoneSetting>(),
            Ok(TimeZoneSetting::Fixed(FixedOffset::east_opt(7200).unwrap()))
        );
        assert_eq!(
            "-0530".parse::<TimeZoneSetting>(),
            Ok(TimeZoneSetting::Fixed(FixedOffset::west_opt(5 * 3600 + 1800).unwrap()))
        );
    }

    #[test]
    fn test_time_zone_parse_invalid() {
        assert!("mars".parse::<TimeZoneSetting>().is_err());
        assert!("+2".parse::<TimeZoneSetting>().is_err());
        assert!("+02:75".parse::<TimeZoneSetting>().is_err());
        assert!("+25:00".parse::<TimeZoneSetting>().is_err());
    }

    #[test]
    fn test_time_zone_display() {
        assert_eq!(TimeZoneSetting::Local.to_string(), "local");
        assert_eq!(TimeZoneSetting::Utc.to_string(), "utc");
        let tz: TimeZoneSetting = "+02:00".parse().unwrap();
        assert_eq!(tz.to_string(), "+02:00");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.time_zone, TimeZoneSetting::Local);
        assert!(config.use_unicode);
        assert!(config.matches_file.is_none());
        assert!(config.backend.url.is_none());
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r##"
log_level = "debug"
time_zone = "utc"
use_unicode = false
matches_file = "/tmp/matches.toml"

[theme]
accent_fg = "#00FF00"

[backend]
url = "https://example.supabase.co"
access_key = "anon-key"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.time_zone, TimeZoneSetting::Utc);
        assert!(!config.use_unicode);
        assert_eq!(config.matches_file, Some(PathBuf::from("/tmp/matches.toml")));
        assert_eq!(config.theme.accent_fg, Color::Rgb(0, 255, 0));
        assert_eq!(config.theme.selection_fg, Color::Rgb(255, 165, 0));
        assert_eq!(config.backend.url.as_deref(), Some("https://example.supabase.co"));
        assert_eq!(
            config.backend.access_key.as_ref().map(|k| k.expose_secret()),
            Some("anon-key")
        );
    }

    #[test]
    fn test_parse_invalid_falls_back_to_default() {
        let config = parse("time_zone = \"nowhere\"");
        assert_eq!(config.time_zone, TimeZoneSetting::Local);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_display_config_follows_unicode_flag() {
        let config = Config {
            use_unicode: false,
            ..Default::default()
        };
        let display = config.display();
        assert!(!display.use_unicode);
        assert_eq!(display.box_chars, BoxChars::ascii());
    }
}
