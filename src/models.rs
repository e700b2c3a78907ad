// src/models.rs
use uuid::Uuid;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize, Deserializer};

/// Three-level strength label attached to every credential.
///
/// Unknown or missing labels coming from stored data are normalized to
/// `Medium` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    /// Parse a stored strength label, falling back to `Medium` for
    /// anything unrecognized.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "weak" => Strength::Weak,
            "strong" => Strength::Strong,
            _ => Strength::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl Default for Strength {
    fn default() -> Self {
        Strength::Medium
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Strength {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Strength::from_label(&label))
    }
}

/// One credential candidate produced by the import parser.
///
/// This is the transient shape handed to the surrounding application;
/// it carries no id or timestamp of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCredential {
    pub name: String,
    pub username: String,
    pub password: String,
    pub category: String,
    #[serde(default)]
    pub strength: Strength,
    pub favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A stored credential record as the surrounding application persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub password: String,
    pub category: String,
    #[serde(default)]
    pub strength: Strength,
    pub favorite: bool,
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Credential {
    /// Materialize a parsed candidate into a full record with a fresh id.
    pub fn from_parsed(parsed: ParsedCredential, last_updated: DateTime<Utc>) -> Self {
        Credential {
            id: Uuid::new_v4(),
            name: parsed.name,
            username: parsed.username,
            password: parsed.password,
            category: parsed.category,
            strength: parsed.strength,
            favorite: parsed.favorite,
            last_updated,
            notes: parsed.notes,
        }
    }
}

/// Password generation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}
