pub mod common;
pub mod issue;

pub use common::*;
pub use issue::*;
