pub mod response;

pub use response::ImportNormsResponse;

use crate::usecases::common::UseCaseMetadata;

/// Имена полей multipart-запроса импорта
pub const FIELD_FILE: &str = "file";
pub const FIELD_PERIOD: &str = "period";

pub struct ImportNorms;

impl UseCaseMetadata for ImportNorms {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "import_norms"
    }

    fn display_name() -> &'static str {
        "Импорт норм из документа"
    }

    fn description() -> &'static str {
        "Извлечение профессий и норм выдачи СИЗ из загруженного документа с помощью LLM"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(ImportNorms::full_name(), "u502_import_norms");
    }
}
