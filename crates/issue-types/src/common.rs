use serde::{Deserialize, Serialize};

use crate::issue::Issue;

/// Cursor pagination metadata, as returned alongside a page of issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

impl PageInfo {
    /// Cursor to request the following page with, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_next_page {
            self.end_cursor.as_deref()
        } else {
            None
        }
    }

    /// Cursor to request the preceding page with, if there is one.
    pub fn previous_cursor(&self) -> Option<&str> {
        if self.has_previous_page {
            self.start_cursor.as_deref()
        } else {
            None
        }
    }
}

/// One page of issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuePage {
    pub issues: Vec<Issue>,
    pub page_info: PageInfo,
    /// 1-based page number for display.
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

impl IssuePage {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
