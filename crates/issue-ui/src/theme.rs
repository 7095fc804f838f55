use dioxus::prelude::*;
use serde::Deserialize;

use crate::error::SkeletonError;

/// Appearance of skeleton placeholders.
///
/// Every field has a default, so a theme file only needs the keys it
/// changes:
///
/// ```toml
/// text_width = "16em"
/// animate = false
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkeletonTheme {
    /// Width of the bar a loading `Span` draws. Fixed, never derived from content.
    pub text_width: String,
    /// Height of that bar.
    pub text_height: String,
    /// Pulse animation on placeholders.
    pub animate: bool,
}

impl Default for SkeletonTheme {
    fn default() -> Self {
        Self {
            text_width: "12em".to_string(),
            text_height: "1em".to_string(),
            animate: true,
        }
    }
}

impl SkeletonTheme {
    /// Parse a theme from TOML, filling unspecified keys with defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, SkeletonError> {
        toml::from_str(source).map_err(|err| {
            tracing::warn!(error = %err, "rejecting skeleton theme");
            SkeletonError::InvalidTheme(err.message().to_string())
        })
    }

    /// Value for the `data-animate` attribute.
    pub fn animate_attr(&self) -> &'static str {
        if self.animate {
            "true"
        } else {
            "false"
        }
    }

    /// Inline style for the text bar.
    pub fn text_style(&self) -> String {
        format!("width: {}; height: {};", self.text_width, self.text_height)
    }
}

/// Provides a [`SkeletonTheme`] to every placeholder below.
#[component]
pub fn SkeletonThemeProvider(theme: SkeletonTheme, children: Element) -> Element {
    let mut current = use_context_provider(|| Signal::new(theme.clone()));
    if *current.peek() != theme {
        current.set(theme);
    }

    rsx! {
        {children}
    }
}

/// Theme of the nearest [`SkeletonThemeProvider`], or the default theme.
pub fn use_skeleton_theme() -> SkeletonTheme {
    let theme = use_hook(try_consume_context::<Signal<SkeletonTheme>>);
    theme.map(|theme| theme()).unwrap_or_default()
}
