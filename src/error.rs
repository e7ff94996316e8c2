use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("No selectable choice: every entry is a separator or disabled")]
    NoSelectableChoice,

    #[error("Prompt interrupted")]
    Interrupted,

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::convert::Infallible> for PromptError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type Result<T> = std::result::Result<T, PromptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", PromptError::Interrupted), "Prompt interrupted");
        assert_eq!(
            format!("{}", PromptError::InvalidChoice("=x".to_string())),
            "Invalid choice: =x"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: PromptError = std::io::Error::other("boom").into();
        assert!(matches!(err, PromptError::Io(_)));
    }
}
