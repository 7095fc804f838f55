//! Issue list components with skeleton loading placeholders.
//!
//! The [`skeleton`] module holds the loading machinery; [`components`] holds
//! the Dioxus components built on it.

pub mod components;
pub mod error;
pub mod format;
pub mod skeleton;
pub mod theme;

pub use error::SkeletonError;
pub use theme::{use_skeleton_theme, SkeletonTheme, SkeletonThemeProvider};
