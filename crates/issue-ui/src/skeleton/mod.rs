//! Loading placeholders driven by a tree-scoped flag.
//!
//! A component wrapped with [`with_skeleton_provider`] decides per render
//! whether its data props have all arrived. If not, it publishes
//! `loading = true` through [`LoadingContext`] and swaps its data props for
//! fallbacks. Leaves below ([`Span`](crate::components::Span), primitives
//! wrapped with [`with_skeleton`]) read the flag and draw neutral
//! placeholders instead of their real content.

mod consumer;
mod context;
mod fallback;
mod placeholder;
mod provider;

pub use consumer::{with_skeleton, Footprint, SkeletonFootprint};
pub use context::{
    use_loading, use_loading_provider, LoadingContext, LoadingScope, LoadingScopeProps,
};
pub use fallback::{FallbackKind, FallbackSpec, Resolved, SkeletonProps};
pub use placeholder::{placeholder, Placeholder, PlaceholderKind};
pub use provider::with_skeleton_provider;
