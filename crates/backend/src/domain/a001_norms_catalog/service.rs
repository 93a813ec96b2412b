use super::repository::NORMS_STORE;
use contracts::domain::a001_norms_catalog::PeriodNorms;

/// Все периоды с нормами, в порядке справочника
pub fn list_all() -> Vec<PeriodNorms> {
    NORMS_STORE.snapshot().into_inner()
}

/// Нормы одного периода
pub fn get_by_period(period: &str) -> Option<PeriodNorms> {
    NORMS_STORE.find_period(period)
}
