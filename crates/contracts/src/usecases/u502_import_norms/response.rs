use crate::domain::a001_norms_catalog::Profession;
use serde::{Deserialize, Serialize};

/// Результат импорта: новый список профессий периода
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportNormsResponse {
    pub period: String,
    pub professions: Vec<Profession>,
    /// Модель, которая выполнила извлечение
    pub model: Option<String>,
}
