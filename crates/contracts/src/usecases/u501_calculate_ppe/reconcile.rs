//! Согласование строк выбора со списком профессий нового периода

use crate::domain::a001_norms_catalog::Profession;
use crate::domain::a002_selection::Selection;
use std::collections::HashSet;

/// Привести строки выбора к списку профессий нового периода.
///
/// - профессия есть в новом списке: строка не меняется (id и численность тоже);
/// - профессии нет: имя заменяется на первую профессию периода;
/// - в периоде нет профессий: все строки удаляются;
/// - если строк не осталось, а профессия по умолчанию есть, создается одна
///   новая строка с численностью 1.
pub fn on_period_change(previous: Vec<Selection>, professions: &[Profession]) -> Vec<Selection> {
    let Some(default_name) = professions.first().map(|p| p.name.clone()) else {
        return Vec::new();
    };

    let known: HashSet<&str> = professions.iter().map(|p| p.name.as_str()).collect();

    let mut updated: Vec<Selection> = previous
        .into_iter()
        .map(|mut selection| {
            if !known.contains(selection.profession_name.as_str()) {
                selection.profession_name = default_name.clone();
            }
            selection
        })
        .collect();

    if updated.is_empty() {
        updated.push(Selection::with_default_headcount(default_name));
    }

    updated
}
