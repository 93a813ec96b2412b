use contracts::domain::a001_norms_catalog::{NormsCatalog, PeriodNorms, Profession};
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

/// Справочник норм процесса (in-memory).
///
/// Замена норм периода выполняется под блокировкой записи целиком, поэтому
/// читатели видят либо старый, либо новый список профессий.
#[derive(Clone)]
pub struct NormsStore {
    catalog: Arc<RwLock<NormsCatalog>>,
}

impl NormsStore {
    pub fn new(catalog: NormsCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn builtin() -> Self {
        Self::new(NormsCatalog::builtin())
    }

    /// Снимок всего справочника
    pub fn snapshot(&self) -> NormsCatalog {
        self.catalog
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn find_period(&self, period: &str) -> Option<PeriodNorms> {
        self.catalog
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .period(period)
            .cloned()
    }

    pub fn replace_period(&self, period: &str, professions: Vec<Profession>) {
        let mut catalog = self
            .catalog
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        catalog.replace_period(period, professions);
    }
}

/// Справочник, общий для всех запросов
pub static NORMS_STORE: Lazy<NormsStore> = Lazy::new(NormsStore::builtin);

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_norms_catalog::{PpeItem, PERIOD_SEPTEMBER};

    #[test]
    fn test_replace_is_visible_to_clones() {
        let store = NormsStore::builtin();
        let other = store.clone();

        store.replace_period(
            PERIOD_SEPTEMBER,
            vec![Profession::new("Welder", vec![PpeItem::new("Gloves", "pair", 2.0)])],
        );

        let period = other.find_period(PERIOD_SEPTEMBER).unwrap();
        assert_eq!(period.professions.len(), 1);
        assert_eq!(period.professions[0].name, "Welder");
    }

    #[test]
    fn test_unknown_period() {
        let store = NormsStore::builtin();
        assert!(store.find_period("Декабрь").is_none());
        assert_eq!(store.snapshot(), NormsCatalog::builtin());
    }
}
