//! Screen profiles
//!
//! A profile describes one firmware setup UI: grid size, the colors that
//! mark highlighted, disabled or subtitle rows, column offsets of the
//! key/value/description zones, and a named table of border patterns.
//! Built-in profiles cover the two known firmware layouts; custom ones can
//! be loaded from JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::core::{AttrFilter, Color, TextStyle};

/// Profile configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown profile '{0}', expected 'client' or 'server'")]
    UnknownProfile(String),

    #[error("pattern '{0}' is missing from the profile")]
    MissingPattern(PatternName),

    #[error("pattern '{name}' does not compile: {source}")]
    InvalidPattern {
        name: PatternName,
        source: regex::Error,
    },

    #[error("grid must have at least one row and column, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    #[error("zone columns must satisfy value < description <= width, got {value}, {description}, {cols}")]
    InvalidZones {
        value: usize,
        description: usize,
        cols: usize,
    },

    #[error("invalid profile description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Built-in profile selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// 100x31 client platform layout
    #[default]
    Client,
    /// 80x25 server platform layout
    Server,
}

impl Profile {
    /// Parse a profile name, falling back to the default profile for
    /// anything unrecognized.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: ConfigError| {
            warn!(%err, "falling back to the client profile");
            Profile::default()
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Client => "client",
            Profile::Server => "server",
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Profile::Client),
            "server" => Ok(Profile::Server),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of the layout patterns every profile must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternName {
    HeaderTop,
    /// Title row; capture group 1, when present, is the title
    HeaderTitle,
    HeaderBottom,
    FooterTop,
    FooterBottom,
    /// Popup top border; group 1 holds an optional scroll-up marker
    PopupTop,
    PopupRow,
    /// Popup bottom border; group 1 holds an optional scroll-down marker
    PopupBottom,
}

impl PatternName {
    pub const ALL: [PatternName; 8] = [
        PatternName::HeaderTop,
        PatternName::HeaderTitle,
        PatternName::HeaderBottom,
        PatternName::FooterTop,
        PatternName::FooterBottom,
        PatternName::PopupTop,
        PatternName::PopupRow,
        PatternName::PopupBottom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternName::HeaderTop => "header_top",
            PatternName::HeaderTitle => "header_title",
            PatternName::HeaderBottom => "header_bottom",
            PatternName::FooterTop => "footer_top",
            PatternName::FooterBottom => "footer_bottom",
            PatternName::PopupTop => "popup_top",
            PatternName::PopupRow => "popup_row",
            PatternName::PopupBottom => "popup_bottom",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A foreground/background combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

impl ColorPair {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    pub fn filter(&self) -> AttrFilter {
        AttrFilter::fg_bg(self.fg.fg_code(), self.bg.bg_code())
    }
}

/// Every tunable of a profile, as plain data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    pub name: String,
    pub cols: usize,
    pub rows: usize,

    /// Focused entry on the main page
    pub highlight: ColorPair,
    /// Focused entry inside a popup
    pub popup_highlight: ColorPair,
    /// Color of the scroll markers
    pub page: ColorPair,
    pub selectable: ColorPair,
    pub disabled: ColorPair,
    pub disabled_style: TextStyle,
    pub subtitle: ColorPair,
    /// Page background; popup rows on it are input boxes
    pub default_bg: Color,
    /// Background of a borderless footer
    pub footer_bg: Color,

    /// Rows searched for the header top border, `[begin, end)`; also the
    /// header bounds when no header is found
    pub header_begin: usize,
    pub header_end: usize,
    /// Default footer height counted from the last row
    pub footer_height: usize,
    /// How far above the footer bottom border its top border may be
    pub footer_border_window: usize,
    /// How far above a background-colored footer bottom its top may be
    pub footer_color_window: usize,

    /// First column of the value zone
    pub value_column: usize,
    /// First column of the description zone
    pub description_column: usize,

    pub scroll_up: char,
    pub scroll_down: char,

    pub patterns: BTreeMap<PatternName, String>,
}

fn pattern_table(entries: &[(PatternName, &str)]) -> BTreeMap<PatternName, String> {
    entries
        .iter()
        .map(|(name, source)| (*name, source.to_string()))
        .collect()
}

impl ProfileSpec {
    pub fn builtin(profile: Profile) -> Self {
        match profile {
            Profile::Client => Self::client(),
            Profile::Server => Self::server(),
        }
    }

    pub fn client() -> Self {
        Self {
            name: Profile::Client.name().to_string(),
            cols: 100,
            rows: 31,
            highlight: ColorPair::new(Color::White, Color::Black),
            popup_highlight: ColorPair::new(Color::White, Color::Cyan),
            page: ColorPair::new(Color::Red, Color::White),
            selectable: ColorPair::new(Color::Blue, Color::White),
            disabled: ColorPair::new(Color::Black, Color::White),
            disabled_style: TextStyle::Bold,
            subtitle: ColorPair::new(Color::Black, Color::White),
            default_bg: Color::White,
            footer_bg: Color::Black,
            header_begin: 0,
            header_end: 6,
            footer_height: 5,
            footer_border_window: 5,
            footer_color_window: 7,
            value_column: 36,
            description_column: 70,
            scroll_up: '^',
            scroll_down: 'v',
            patterns: pattern_table(&[
                (PatternName::HeaderTop, r"-{10}"),
                (PatternName::HeaderTitle, r" +([\S ]+[\S]) +"),
                (PatternName::HeaderBottom, r"-{10}"),
                (PatternName::FooterTop, r"^/-*\\$"),
                (PatternName::FooterBottom, r"^\\-*/$"),
                (PatternName::PopupTop, r"/-+(\^?)-+\\"),
                (PatternName::PopupRow, r"\|(.*)\|"),
                (PatternName::PopupBottom, r"\\-+(v?)-+/"),
            ]),
        }
    }

    pub fn server() -> Self {
        Self {
            name: Profile::Server.name().to_string(),
            cols: 80,
            rows: 25,
            selectable: ColorPair::new(Color::Black, Color::White),
            subtitle: ColorPair::new(Color::Blue, Color::White),
            value_column: 30,
            description_column: 57,
            patterns: pattern_table(&[
                (PatternName::HeaderTop, r"^/-*\\$"),
                (PatternName::HeaderTitle, r"^\| *([\S ]+[\S]) *\|$"),
                (PatternName::HeaderBottom, r"^\\-*/$"),
                (PatternName::FooterTop, r"^/-*\\$"),
                (PatternName::FooterBottom, r"^\\-+(.*)-+/$"),
                (PatternName::PopupTop, r"/-+(\^?)-+\\"),
                (PatternName::PopupRow, r"\|(.*)\|"),
                (PatternName::PopupBottom, r"\\-+(v?)-+/"),
            ]),
            ..Self::client()
        }
    }
}

/// Compiled patterns, looked up by name
#[derive(Debug, Clone)]
struct PatternTable {
    regexes: Vec<Regex>,
}

impl PatternTable {
    fn compile(sources: &BTreeMap<PatternName, String>) -> Result<Self, ConfigError> {
        let regexes = PatternName::ALL
            .iter()
            .map(|&name| {
                let source = sources
                    .get(&name)
                    .ok_or(ConfigError::MissingPattern(name))?;
                Regex::new(source).map_err(|source| ConfigError::InvalidPattern { name, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { regexes })
    }

    // Compiled in `PatternName::ALL` order, which is declaration order.
    fn get(&self, name: PatternName) -> &Regex {
        &self.regexes[name as usize]
    }
}

/// A validated profile with its patterns compiled
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    spec: ProfileSpec,
    patterns: PatternTable,
}

impl ProfileConfig {
    /// Validate a profile description and compile its patterns
    pub fn compile(spec: ProfileSpec) -> Result<Self, ConfigError> {
        if spec.cols == 0 || spec.rows == 0 {
            return Err(ConfigError::InvalidDimensions {
                cols: spec.cols,
                rows: spec.rows,
            });
        }
        if spec.value_column >= spec.description_column || spec.description_column > spec.cols {
            return Err(ConfigError::InvalidZones {
                value: spec.value_column,
                description: spec.description_column,
                cols: spec.cols,
            });
        }
        let patterns = PatternTable::compile(&spec.patterns)?;
        Ok(Self { spec, patterns })
    }

    /// Parse and compile a JSON profile description
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let spec: ProfileSpec = serde_json::from_str(json)?;
        Self::compile(spec)
    }

    /// One of the built-in profiles
    pub fn builtin(profile: Profile) -> Self {
        static CLIENT: OnceLock<ProfileConfig> = OnceLock::new();
        static SERVER: OnceLock<ProfileConfig> = OnceLock::new();
        let cell = match profile {
            Profile::Client => &CLIENT,
            Profile::Server => &SERVER,
        };
        cell.get_or_init(|| {
            Self::compile(ProfileSpec::builtin(profile)).expect("built-in profile is valid")
        })
        .clone()
    }

    pub fn spec(&self) -> &ProfileSpec {
        &self.spec
    }

    pub fn pattern(&self, name: PatternName) -> &Regex {
        self.patterns.get(name)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self::builtin(Profile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_names() {
        assert_eq!("client".parse::<Profile>().unwrap(), Profile::Client);
        assert_eq!("server".parse::<Profile>().unwrap(), Profile::Server);
        assert!(matches!(
            "desktop".parse::<Profile>(),
            Err(ConfigError::UnknownProfile(name)) if name == "desktop"
        ));
        assert_eq!(Profile::from_name_or_default("desktop"), Profile::Client);
        assert_eq!(Profile::from_name_or_default("server"), Profile::Server);
    }

    #[test]
    fn test_builtin_dimensions() {
        let client = ProfileConfig::builtin(Profile::Client);
        assert_eq!((client.spec().cols, client.spec().rows), (100, 31));
        assert_eq!(client.spec().value_column, 36);
        assert_eq!(client.spec().description_column, 70);

        let server = ProfileConfig::builtin(Profile::Server);
        assert_eq!((server.spec().cols, server.spec().rows), (80, 25));
        assert_eq!(server.spec().value_column, 30);
        assert_eq!(server.spec().description_column, 57);
        assert_eq!(server.spec().subtitle, ColorPair::new(Color::Blue, Color::White));
    }

    #[test]
    fn test_builtin_patterns() {
        let client = ProfileConfig::builtin(Profile::Client);
        assert!(client.pattern(PatternName::FooterTop).is_match("/-----\\"));
        assert!(!client.pattern(PatternName::FooterTop).is_match(" /-----\\"));
        assert!(client.pattern(PatternName::FooterBottom).is_match("\\-----/"));

        let caps = client
            .pattern(PatternName::PopupTop)
            .captures("   /----^----\\   ")
            .unwrap();
        assert_eq!(&caps[1], "^");

        let server = ProfileConfig::builtin(Profile::Server);
        let caps = server
            .pattern(PatternName::HeaderTitle)
            .captures("|    Main    |")
            .unwrap();
        assert_eq!(&caps[1], "Main");
    }

    #[test]
    fn test_color_pair_filter() {
        let filter = ColorPair::new(Color::White, Color::Black).filter();
        assert_eq!(filter, AttrFilter::fg_bg(37, 40));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let mut spec = ProfileSpec::client();
        spec.patterns
            .insert(PatternName::PopupRow, "(unclosed".to_string());
        assert!(matches!(
            ProfileConfig::compile(spec),
            Err(ConfigError::InvalidPattern {
                name: PatternName::PopupRow,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_pattern_rejected() {
        let mut spec = ProfileSpec::server();
        spec.patterns.remove(&PatternName::HeaderTitle);
        assert!(matches!(
            ProfileConfig::compile(spec),
            Err(ConfigError::MissingPattern(PatternName::HeaderTitle))
        ));
    }

    #[test]
    fn test_invalid_zones_rejected() {
        let mut spec = ProfileSpec::client();
        spec.description_column = 120;
        assert!(matches!(
            ProfileConfig::compile(spec),
            Err(ConfigError::InvalidZones { .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let json = serde_json::to_string(&ProfileSpec::server()).unwrap();
        assert!(json.contains("\"popup_bottom\""));
        let config = ProfileConfig::from_json(&json).unwrap();
        assert_eq!(config.spec(), &ProfileSpec::server());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            ProfileConfig::from_json("{\"name\": 3}"),
            Err(ConfigError::Json(_))
        ));
    }
}
