use thiserror::Error;

#[derive(Error, Debug)]
pub enum KanbanError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl KanbanError {
    pub fn column_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("column {}", id))
    }

    pub fn card_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("card {}", id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helpers() {
        let err = KanbanError::column_not_found("todo");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: column todo");

        let err = KanbanError::card_not_found("c1");
        assert_eq!(err.to_string(), "Not found: card c1");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err: KanbanError = io.into();
        assert!(matches!(err, KanbanError::Io(_)));
        assert!(!err.is_validation());
    }
}
