use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Issue state ─────────────────────────────────────────────────────

/// Lifecycle state of an issue, serialized the way the issues API reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    /// Wire value ("OPEN" / "CLOSED").
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "OPEN",
            IssueState::Closed => "CLOSED",
        }
    }

    /// Human-readable label for tooltips and screen readers.
    pub fn label(&self) -> &'static str {
        match self {
            IssueState::Open => "Open",
            IssueState::Closed => "Closed",
        }
    }

    /// Lowercase key used for CSS `data-state` attributes.
    pub fn css_key(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

// ── Labels ──────────────────────────────────────────────────────────

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// Hex colour, with or without a leading `#` (the API omits it).
    pub color: String,
}

impl Label {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// The label colour as a CSS colour value.
    ///
    /// Only 3- or 6-digit hex is accepted; anything else reads as
    /// `transparent`, since the value ends up in an inline style.
    pub fn css_color(&self) -> String {
        let hex = self.color.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            format!("#{hex}")
        } else {
            "transparent".to_string()
        }
    }
}

// ── Issue ───────────────────────────────────────────────────────────

/// An issue as shown in a list row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    /// Login of the author; `None` for deleted accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comment_count: u32,
    /// `owner/name` of the repository, set when listing across repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
}
