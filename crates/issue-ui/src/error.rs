use thiserror::Error;

/// Errors raised by the skeleton subsystem.
///
/// Both variants are caller bugs: a fallback declared with a non-positive
/// width, or a theme file that does not parse. Neither is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkeletonError {
    #[error("placeholder length must be positive, got {0}")]
    InvalidPlaceholderLength(i64),

    #[error("invalid skeleton theme: {0}")]
    InvalidTheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_bad_length() {
        let err = SkeletonError::InvalidPlaceholderLength(-5);
        assert_eq!(err.to_string(), "placeholder length must be positive, got -5");
    }

    #[test]
    fn display_wraps_theme_message() {
        let err = SkeletonError::InvalidTheme("expected a string".into());
        assert_eq!(err.to_string(), "invalid skeleton theme: expected a string");
    }
}
