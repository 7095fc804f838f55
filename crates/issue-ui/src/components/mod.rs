// Skeleton primitives
pub mod skeleton;

// Standalone building blocks
pub mod button;
pub mod chip;
pub mod icons;
pub mod time_ago;

// Issue views, built on the above
pub mod issue_list;
pub mod issue_list_item;
pub mod pagination;

// Re-exports for convenience
pub use button::*;
pub use chip::*;
pub use icons::*;
pub use issue_list::*;
pub use issue_list_item::*;
pub use pagination::*;
pub use skeleton::*;
pub use time_ago::*;
