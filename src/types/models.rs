use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SCRIPT_URL;

/// Script ids are derived from the creation time in milliseconds.
pub type ScriptId = i64;

fn default_url() -> String {
    DEFAULT_SCRIPT_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: ScriptId,
    pub title: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    pub category: String,
    #[serde(default, alias = "isTampermonkey")]
    pub is_external_tool: bool,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
    #[serde(default)]
    pub copy_count: u64,
}

impl Script {
    /// Label shown in the owner dashboard's type column.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        if self.is_external_tool {
            "Tampermonkey"
        } else {
            "Standard"
        }
    }
}

/// Fields submitted through the script form.
///
/// `tags` and `preview_image_url` are left untouched on update when `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub is_external_tool: bool,
    pub content: String,
    pub url: String,
    pub tags: Option<Vec<String>>,
    pub preview_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(alias = "email")]
    pub identifier: String,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub is_owner: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Category selector of the script grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Favorites,
    Category(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "All";
    pub const FAVORITES: &'static str = "Favorites";

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Favorites => Self::FAVORITES,
            CategoryFilter::Category(name) => name,
        }
    }
}

/// Only the exact sentinel names select `All` and `Favorites`; any other
/// spelling, such as a user category named `all`, is a category name.
impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        match value {
            Self::ALL => CategoryFilter::All,
            Self::FAVORITES => CategoryFilter::Favorites,
            other => CategoryFilter::Category(other.to_string()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_accepts_legacy_field_names() {
        let json = r#"{
            "id": 7,
            "title": "Legacy",
            "desc": "old shape",
            "category": "Automation",
            "isTampermonkey": true,
            "content": "alert(1)"
        }"#;

        let script: Script = serde_json::from_str(json).unwrap();
        assert_eq!(script.description, "old shape");
        assert!(script.is_external_tool);
        assert_eq!(script.url, DEFAULT_SCRIPT_URL);
        assert!(script.tags.is_empty());
        assert_eq!(script.copy_count, 0);
    }

    #[test]
    fn test_script_serializes_canonical_names() {
        let script = Script {
            id: 1,
            title: "T".to_string(),
            description: "D".to_string(),
            category: "C".to_string(),
            is_external_tool: false,
            content: String::new(),
            url: DEFAULT_SCRIPT_URL.to_string(),
            tags: vec!["x".to_string()],
            preview_image_url: Some("https://img".to_string()),
            copy_count: 3,
        };

        let value = serde_json::to_value(&script).unwrap();
        assert_eq!(value["description"], "D");
        assert_eq!(value["isExternalTool"], false);
        assert_eq!(value["previewImageUrl"], "https://img");
        assert_eq!(value["copyCount"], 3);
        assert!(value.get("desc").is_none());
    }

    #[test]
    fn test_session_accepts_legacy_field_names() {
        let session: Session =
            serde_json::from_str(r#"{"email":"a@b.c","name":"a","isOwner":false}"#).unwrap();
        assert_eq!(session.identifier, "a@b.c");
        assert_eq!(session.display_name, "a");
    }

    #[test]
    fn test_theme_round_trip_strings() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_category_filter_sentinels() {
        assert_eq!(CategoryFilter::from("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from("Favorites"), CategoryFilter::Favorites);
        assert_eq!(
            CategoryFilter::from("Developer"),
            CategoryFilter::Category("Developer".to_string())
        );
    }

    #[test]
    fn test_category_filter_lowercase_sentinel_is_a_category() {
        assert_eq!(
            CategoryFilter::from("all"),
            CategoryFilter::Category("all".to_string())
        );
        assert_eq!(
            CategoryFilter::from("favorites"),
            CategoryFilter::Category("favorites".to_string())
        );
    }
}
