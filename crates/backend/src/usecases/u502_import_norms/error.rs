use axum::http::StatusCode;
use contracts::domain::a001_norms_catalog::CatalogValidationError;
use contracts::usecases::common::UseCaseError;
use thiserror::Error;

use crate::shared::format::format_kilobytes;
use crate::shared::llm::LlmError;

/// Сообщение для пользователя при неудачном извлечении норм
pub const IMPORT_FAILED_MESSAGE: &str =
    "Не удалось извлечь нормы из документа. Проверьте файл и попробуйте снова.";

/// Ошибки импорта норм
#[derive(Debug, Error)]
pub enum NormsImportError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Another import is in progress")]
    Busy,

    #[error("LLM provider is not configured")]
    NotConfigured,

    #[error("Document exceeds the limit of {limit} bytes")]
    DocumentTooLarge { limit: usize },

    #[error("LLM provider failed: {0}")]
    Provider(#[from] LlmError),

    #[error("LLM answer is not valid JSON: {0}")]
    Unparsable(String),

    #[error("Extracted norms rejected: {0}")]
    Invalid(#[from] CatalogValidationError),
}

impl NormsImportError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Busy => StatusCode::CONFLICT,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::DocumentTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Provider(_) => StatusCode::BAD_GATEWAY,
            Self::Unparsable(_) | Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Тело ответа API: понятное сообщение плюс техническая причина в details
    pub fn to_usecase_error(&self) -> UseCaseError {
        let error = match self {
            Self::BadRequest(msg) => UseCaseError::validation(msg.clone()),
            Self::Busy => UseCaseError::conflict(
                "Импорт уже выполняется. Дождитесь его завершения.",
            ),
            Self::NotConfigured => {
                UseCaseError::new("NOT_CONFIGURED", "Импорт документов не настроен на сервере.")
            }
            Self::DocumentTooLarge { limit } => UseCaseError::new(
                "PAYLOAD_TOO_LARGE",
                format!(
                    "Документ слишком большой. Максимальный размер: {}.",
                    format_kilobytes(*limit)
                ),
            ),
            Self::Provider(_) => UseCaseError::external(IMPORT_FAILED_MESSAGE),
            Self::Unparsable(_) | Self::Invalid(_) => {
                UseCaseError::new("EXTRACTION_REJECTED", IMPORT_FAILED_MESSAGE)
            }
        };
        error.with_details(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(NormsImportError::Busy.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            NormsImportError::Provider(LlmError::RateLimitExceeded).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            NormsImportError::Invalid(CatalogValidationError::Empty).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            NormsImportError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NormsImportError::DocumentTooLarge { limit: 1024 }.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_usecase_error_keeps_cause_in_details() {
        let err = NormsImportError::Unparsable("expected value".into()).to_usecase_error();
        assert_eq!(err.code, "EXTRACTION_REJECTED");
        assert_eq!(err.message, IMPORT_FAILED_MESSAGE);
        assert!(err.details.unwrap().contains("expected value"));
    }
}
