//! Состояние сеанса калькулятора.
//!
//! Все изменения идут через методы [`CalculatorSession`]; после каждого из них
//! итоги пересчитываются явным вызовом [`compute_totals`], неявных зависимостей нет.

use super::export::{export_report, ExportError, ExportFile};
use super::reconcile::on_period_change;
use super::totals::{
    compute_breakdown, compute_contributions, compute_totals, Contribution, ItemBreakdown,
    PpeTotals,
};
use crate::domain::a001_norms_catalog::{NormsCatalog, Profession};
use crate::domain::a002_selection::{Selection, SelectionId};

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorSession {
    catalog: NormsCatalog,
    active_period: String,
    selections: Vec<Selection>,
    totals: PpeTotals,
}

impl CalculatorSession {
    /// Новый сеанс: первый период справочника и одна строка с профессией по умолчанию
    pub fn new(catalog: NormsCatalog) -> Self {
        let active_period = catalog.default_period().unwrap_or_default().to_string();
        let selections = catalog
            .professions(&active_period)
            .first()
            .map(|p| vec![Selection::with_default_headcount(p.name.clone())])
            .unwrap_or_default();

        let mut session = Self {
            catalog,
            active_period,
            selections,
            totals: PpeTotals::new(),
        };
        session.recompute();
        session
    }

    fn recompute(&mut self) {
        self.totals = compute_totals(&self.selections, self.professions());
    }

    fn default_profession_name(&self) -> Option<String> {
        self.professions().first().map(|p| p.name.clone())
    }

    // ---- чтение ----

    pub fn periods(&self) -> Vec<String> {
        self.catalog.periods()
    }

    pub fn active_period(&self) -> &str {
        &self.active_period
    }

    /// Профессии активного периода
    pub fn professions(&self) -> &[Profession] {
        self.catalog.professions(&self.active_period)
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn totals(&self) -> &PpeTotals {
        &self.totals
    }

    pub fn contributions(&self, item_name: &str) -> Vec<Contribution> {
        compute_contributions(&self.selections, self.professions(), item_name)
    }

    pub fn breakdown(&self) -> Vec<ItemBreakdown> {
        compute_breakdown(&self.selections, self.professions())
    }

    pub fn export(&self) -> Result<ExportFile, ExportError> {
        export_report(&self.active_period, &self.totals)
    }

    // ---- изменения ----

    /// Добавить строку с профессией по умолчанию. Без профессий в периоде ничего не делает.
    pub fn add_selection(&mut self) -> Option<SelectionId> {
        let name = self.default_profession_name()?;
        let selection = Selection::with_default_headcount(name);
        let id = selection.id;
        self.selections.push(selection);
        self.recompute();
        Some(id)
    }

    pub fn remove_selection(&mut self, id: SelectionId) {
        self.selections.retain(|s| s.id != id);
        self.recompute();
    }

    pub fn set_profession(&mut self, id: SelectionId, profession_name: &str) {
        if let Some(selection) = self.selections.iter_mut().find(|s| s.id == id) {
            selection.profession_name = profession_name.to_string();
        }
        self.recompute();
    }

    /// Численность из поля ввода; отрицательные значения становятся нулем
    pub fn set_headcount(&mut self, id: SelectionId, headcount: i64) {
        if let Some(selection) = self.selections.iter_mut().find(|s| s.id == id) {
            selection.set_headcount_clamped(headcount);
        }
        self.recompute();
    }

    pub fn change_period(&mut self, period: &str) {
        self.active_period = period.to_string();
        self.reconcile();
    }

    /// Заменить нормы периода целиком (например, после импорта документа).
    /// Если период активен, строки выбора согласуются с новым списком.
    pub fn replace_catalog(&mut self, period: &str, professions: Vec<Profession>) {
        self.catalog.replace_period(period, professions);
        if period == self.active_period {
            self.reconcile();
        } else {
            self.recompute();
        }
    }

    /// Подменить весь справочник (например, загруженный с сервера).
    /// Активный период сохраняется, если он есть в новом справочнике.
    pub fn load_catalog(&mut self, catalog: NormsCatalog) {
        if !catalog.contains_period(&self.active_period) {
            self.active_period = catalog.default_period().unwrap_or_default().to_string();
        }
        self.catalog = catalog;
        self.reconcile();
    }

    fn reconcile(&mut self) {
        let previous = std::mem::take(&mut self.selections);
        self.selections = on_period_change(previous, self.professions());
        self.recompute();
    }
}
