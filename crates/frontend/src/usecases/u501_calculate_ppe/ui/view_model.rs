//! Калькулятор СИЗ - View Model

use crate::shared::export::download_text;
use contracts::domain::a001_norms_catalog::{NormsCatalog, Profession};
use contracts::domain::a002_selection::SelectionId;
use contracts::usecases::u501_calculate_ppe::CalculatorSession;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CalculatorVm {
    /// Единственный источник состояния; итоги внутри пересчитываются при каждом изменении
    pub session: RwSignal<CalculatorSession>,
    pub error: RwSignal<Option<String>>,
}

impl CalculatorVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(CalculatorSession::new(NormsCatalog::builtin())),
            error: RwSignal::new(None),
        }
    }

    pub fn change_period(&self, period: String) {
        self.session.update(|s| s.change_period(&period));
    }

    pub fn add_selection(&self) {
        self.session.update(|s| {
            s.add_selection();
        });
    }

    pub fn remove_selection(&self, id: SelectionId) {
        self.session.update(|s| s.remove_selection(id));
    }

    pub fn set_profession(&self, id: SelectionId, name: String) {
        self.session.update(|s| s.set_profession(id, &name));
    }

    /// Значение поля "Кол-во сотрудников" как есть из input
    pub fn set_headcount(&self, id: SelectionId, raw: &str) {
        let headcount = parse_headcount(raw);
        self.session.update(|s| s.set_headcount(id, headcount));
    }

    pub fn load_catalog(&self, catalog: NormsCatalog) {
        self.session.update(|s| s.load_catalog(catalog));
    }

    pub fn replace_catalog(&self, period: &str, professions: Vec<Profession>) {
        self.session.update(|s| s.replace_catalog(period, professions));
    }

    /// Сохранить итоги в .txt
    pub fn save_txt(&self) {
        let exported = self.session.with(|s| s.export());
        match exported {
            Ok(file) => {
                if let Err(e) = download_text(&file.file_name, &file.content) {
                    log::error!("Failed to download {}: {}", file.file_name, e);
                    self.error.set(Some(e));
                } else {
                    self.error.set(None);
                }
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}

/// Пустое или нечисловое значение считается нулем, дробная часть отбрасывается
pub fn parse_headcount(raw: &str) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i64,
        _ => 0,
    }
}
