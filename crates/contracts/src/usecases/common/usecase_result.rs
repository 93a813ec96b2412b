use serde::{Deserialize, Serialize};

/// Ошибка выполнения UseCase. Это же тело JSON-ответа API при ошибке.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl UseCaseError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::new("EXTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for UseCaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for UseCaseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_details() {
        let err = UseCaseError::validation("Период не указан").with_details("field: period");
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] Период не указан: field: period");
        assert_eq!(UseCaseError::conflict("busy").to_string(), "[CONFLICT] busy");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(UseCaseError::external("LLM недоступна")).unwrap();
        assert_eq!(json["code"], "EXTERNAL_ERROR");
        assert_eq!(json["message"], "LLM недоступна");
        assert!(json["details"].is_null());
    }
}
