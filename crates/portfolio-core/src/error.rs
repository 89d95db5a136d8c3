//! Error types for the portfolio

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The element an operation renders into has not been mounted
    #[error("Render target unavailable: {0}")]
    RenderTargetUnavailable(String),

    /// Two tech-stack groups share a title
    #[error("Duplicate tech stack group: {0}")]
    DuplicateGroup(String),

    /// A tech-stack group lists no skills
    #[error("Tech stack group has no skills: {0}")]
    EmptyGroup(String),

    /// A skill level lies outside 0..=100
    #[error("Skill level out of range: {group}/{skill} = {level}")]
    LevelOutOfRange {
        group: String,
        skill: String,
        level: u8,
    },

    /// A project at the given index has a blank title
    #[error("Project at index {0} has an empty title")]
    EmptyProjectTitle(usize),

    /// Error during serialization of content tables
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::RenderTargetUnavailable("theme root".to_string());
        assert_eq!(format!("{}", err), "Render target unavailable: theme root");

        let err = PortfolioError::LevelOutOfRange {
            group: "Frontend".to_string(),
            skill: "HTML5".to_string(),
            level: 120,
        };
        assert_eq!(
            format!("{}", err),
            "Skill level out of range: Frontend/HTML5 = 120"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: PortfolioError = serde_err.into();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }
}
