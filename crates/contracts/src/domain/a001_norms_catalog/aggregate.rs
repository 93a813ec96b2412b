use serde::{Deserialize, Serialize};

/// Позиция СИЗ в нормах профессии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpeItem {
    /// Наименование товара
    pub name: String,
    /// Единица измерения ("пар", "шт")
    pub unit: String,
    /// Норма выдачи на одного сотрудника
    pub quantity: f64,
}

impl PpeItem {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
        }
    }
}

/// Профессия с перечнем положенных СИЗ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    pub name: String,
    pub items: Vec<PpeItem>,
}

impl Profession {
    pub fn new(name: impl Into<String>, items: Vec<PpeItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Найти позицию по точному совпадению наименования
    pub fn find_item(&self, item_name: &str) -> Option<&PpeItem> {
        self.items.iter().find(|i| i.name == item_name)
    }
}

/// Нормы одного периода
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodNorms {
    pub period: String,
    pub professions: Vec<Profession>,
}

/// Справочник норм: период -> упорядоченный список профессий.
///
/// Порядок периодов сохраняется: первый период считается периодом по умолчанию,
/// новые периоды из импорта добавляются в конец.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormsCatalog {
    periods: Vec<PeriodNorms>,
}

impl NormsCatalog {
    pub fn new(periods: Vec<PeriodNorms>) -> Self {
        Self { periods }
    }

    /// Идентификаторы периодов в исходном порядке
    pub fn periods(&self) -> Vec<String> {
        self.periods.iter().map(|p| p.period.clone()).collect()
    }

    pub fn default_period(&self) -> Option<&str> {
        self.periods.first().map(|p| p.period.as_str())
    }

    pub fn contains_period(&self, period: &str) -> bool {
        self.periods.iter().any(|p| p.period == period)
    }

    pub fn period(&self, period: &str) -> Option<&PeriodNorms> {
        self.periods.iter().find(|p| p.period == period)
    }

    /// Профессии периода; для неизвестного периода пустой срез
    pub fn professions(&self, period: &str) -> &[Profession] {
        self.period(period)
            .map(|p| p.professions.as_slice())
            .unwrap_or(&[])
    }

    pub fn find_profession(&self, period: &str, name: &str) -> Option<&Profession> {
        find_profession(self.professions(period), name)
    }

    /// Заменить список профессий периода целиком.
    /// Неизвестный период добавляется в конец.
    pub fn replace_period(&mut self, period: &str, professions: Vec<Profession>) {
        match self.periods.iter_mut().find(|p| p.period == period) {
            Some(existing) => existing.professions = professions,
            None => self.periods.push(PeriodNorms {
                period: period.to_string(),
                professions,
            }),
        }
    }

    pub fn as_slice(&self) -> &[PeriodNorms] {
        &self.periods
    }

    pub fn into_inner(self) -> Vec<PeriodNorms> {
        self.periods
    }
}

/// Первая профессия с точным совпадением имени
pub fn find_profession<'a>(professions: &'a [Profession], name: &str) -> Option<&'a Profession> {
    professions.iter().find(|p| p.name == name)
}
