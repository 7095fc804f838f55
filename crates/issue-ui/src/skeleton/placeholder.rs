use std::num::NonZeroUsize;

use crate::error::SkeletonError;

/// Filler cycled to build placeholder text. Word-shaped so the text wraps
/// and truncates like real prose would.
const FILLER: &str = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor ";

/// What kind of value a placeholder stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PlaceholderKind {
    Text,
}

/// A synthetic value of a given visual length, used in place of data that
/// has not arrived yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder {
    kind: PlaceholderKind,
    length: NonZeroUsize,
}

/// Describe a text placeholder `length` characters wide.
///
/// Fails with [`SkeletonError::InvalidPlaceholderLength`] when `length <= 0`.
pub fn placeholder(length: i64) -> Result<Placeholder, SkeletonError> {
    usize::try_from(length)
        .ok()
        .and_then(NonZeroUsize::new)
        .map(Placeholder::from_width)
        .ok_or(SkeletonError::InvalidPlaceholderLength(length))
}

impl Placeholder {
    /// Infallible constructor for widths already known to be positive.
    pub const fn from_width(length: NonZeroUsize) -> Self {
        Self {
            kind: PlaceholderKind::Text,
            length,
        }
    }

    pub fn kind(&self) -> PlaceholderKind {
        self.kind
    }

    pub fn width(&self) -> usize {
        self.length.get()
    }

    /// Materialize the placeholder: exactly `width()` characters, same output
    /// for the same length.
    pub fn text(&self) -> String {
        FILLER.chars().cycle().take(self.length.get()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_non_positive_lengths() {
        assert_eq!(placeholder(0), Err(SkeletonError::InvalidPlaceholderLength(0)));
        assert_eq!(placeholder(-5), Err(SkeletonError::InvalidPlaceholderLength(-5)));
        assert_eq!(
            placeholder(i64::MIN),
            Err(SkeletonError::InvalidPlaceholderLength(i64::MIN))
        );
    }

    #[test]
    fn length_one_is_the_smallest_valid_width() {
        let p = placeholder(1).unwrap();
        assert_eq!(p.width(), 1);
        assert_eq!(p.kind(), PlaceholderKind::Text);
        assert_eq!(p.text().chars().count(), 1);
    }

    #[test]
    fn text_has_requested_length() {
        for n in [1, 10, 50, FILLER.len() as i64, FILLER.len() as i64 * 3 + 7] {
            let text = placeholder(n).unwrap().text();
            assert_eq!(text.chars().count(), n as usize);
        }
    }

    #[test]
    fn same_length_gives_same_text() {
        let a = placeholder(50).unwrap();
        let b = placeholder(50).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.text(), b.text());
    }

    #[test]
    fn from_width_matches_checked_constructor() {
        let width = NonZeroUsize::new(10).unwrap();
        assert_eq!(Placeholder::from_width(width), placeholder(10).unwrap());
    }
}
