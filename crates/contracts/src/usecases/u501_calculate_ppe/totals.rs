//! Расчет итоговой потребности в СИЗ.
//!
//! Все функции чистые: на вход текущие строки выбора и список профессий
//! активного периода, на выход производные данные. Строки с нулевой
//! численностью или с профессией, которой нет в периоде, ничего не вносят.

use crate::domain::a001_norms_catalog::{find_profession, Profession};
use crate::domain::a002_selection::Selection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Итог по одной позиции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalPpeItem {
    pub unit: String,
    pub total_quantity: f64,
}

/// Наименование товара -> итог. Ключи упорядочены лексикографически.
pub type PpeTotals = BTreeMap<String, TotalPpeItem>;

/// Вклад одной строки выбора в итог позиции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub profession_name: String,
    pub headcount: u32,
    pub quantity_per_employee: f64,
    pub subtotal: f64,
}

/// Позиция итога вместе с детализацией по профессиям
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemBreakdown {
    pub item_name: String,
    pub total: TotalPpeItem,
    pub contributions: Vec<Contribution>,
}

/// Строки, которые участвуют в расчете, вместе с найденной профессией
fn resolved<'a>(
    selections: &'a [Selection],
    professions: &'a [Profession],
) -> impl Iterator<Item = (&'a Selection, &'a Profession)> {
    selections
        .iter()
        .filter(|s| s.headcount > 0)
        .filter_map(move |s| find_profession(professions, &s.profession_name).map(|p| (s, p)))
}

/// Итоги хранятся с точностью до миллионных, этого хватает для дробных норм
const TOTAL_PRECISION: f64 = 1_000_000.0;

/// Итоговая потребность по всем позициям.
///
/// Если у двух профессий есть позиции с одинаковым наименованием, но разными
/// единицами, в итог попадает единица первой встреченной позиции в порядке строк.
/// Слагаемые суммируются по возрастанию, поэтому порядок строк на сумму не влияет.
pub fn compute_totals(selections: &[Selection], professions: &[Profession]) -> PpeTotals {
    let mut subtotals: BTreeMap<String, (String, Vec<f64>)> = BTreeMap::new();

    for (selection, profession) in resolved(selections, professions) {
        let headcount = selection.headcount as f64;
        for item in &profession.items {
            subtotals
                .entry(item.name.clone())
                .or_insert_with(|| (item.unit.clone(), Vec::new()))
                .1
                .push(item.quantity * headcount);
        }
    }

    subtotals
        .into_iter()
        .map(|(name, (unit, mut parts))| {
            parts.sort_by(f64::total_cmp);
            let sum: f64 = parts.iter().sum();
            let total = TotalPpeItem {
                unit,
                total_quantity: round_total(sum),
            };
            (name, total)
        })
        .collect()
}

fn round_total(value: f64) -> f64 {
    (value * TOTAL_PRECISION).round() / TOTAL_PRECISION
}

/// Детализация одной позиции: по строке на каждую участвующую строку выбора,
/// в порядке строк выбора.
pub fn compute_contributions(
    selections: &[Selection],
    professions: &[Profession],
    item_name: &str,
) -> Vec<Contribution> {
    resolved(selections, professions)
        .filter_map(|(selection, profession)| {
            profession.find_item(item_name).map(|item| Contribution {
                profession_name: selection.profession_name.clone(),
                headcount: selection.headcount,
                quantity_per_employee: item.quantity,
                subtotal: item.quantity * selection.headcount as f64,
            })
        })
        .collect()
}

/// Все позиции итога с детализацией, отсортированные по наименованию
pub fn compute_breakdown(selections: &[Selection], professions: &[Profession]) -> Vec<ItemBreakdown> {
    compute_totals(selections, professions)
        .into_iter()
        .map(|(item_name, total)| {
            let contributions = compute_contributions(selections, professions, &item_name);
            ItemBreakdown {
                item_name,
                total,
                contributions,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_norms_catalog::{NormsCatalog, PpeItem, PERIOD_SEPTEMBER};

    fn catalog() -> Vec<Profession> {
        vec![
            Profession::new(
                "Welder",
                vec![
                    PpeItem::new("Gloves", "pair", 2.0),
                    PpeItem::new("Mask", "pcs", 1.0),
                ],
            ),
            Profession::new(
                "Operator",
                vec![
                    PpeItem::new("Mask", "pcs", 2.0),
                    PpeItem::new("Soap", "pcs", 0.5),
                ],
            ),
            Profession::new("Electrician", vec![PpeItem::new("Gloves", "pcs", 3.0)]),
        ]
    }

    #[test]
    fn test_single_selection_scenario() {
        let professions = vec![Profession::new(
            "Welder",
            vec![PpeItem::new("Gloves", "pair", 2.0)],
        )];
        let selections = vec![Selection::new("Welder", 3)];

        let totals = compute_totals(&selections, &professions);

        assert_eq!(totals.len(), 1);
        assert_eq!(
            totals["Gloves"],
            TotalPpeItem {
                unit: "pair".into(),
                total_quantity: 6.0
            }
        );
    }

    #[test]
    fn test_totals_sum_across_professions() {
        let selections = vec![Selection::new("Welder", 2), Selection::new("Operator", 4)];
        let totals = compute_totals(&selections, &catalog());

        assert_eq!(totals["Gloves"].total_quantity, 4.0);
        assert_eq!(totals["Mask"].total_quantity, 2.0 + 8.0);
        assert_eq!(totals["Soap"].total_quantity, 2.0);
        assert_eq!(
            totals.keys().cloned().collect::<Vec<_>>(),
            vec!["Gloves", "Mask", "Soap"]
        );
    }

    #[test]
    fn test_zero_headcount_and_unknown_profession_contribute_nothing() {
        let selections = vec![
            Selection::new("Welder", 0),
            Selection::new("Ghost", 10),
            Selection::new("Operator", 1),
        ];
        let professions = catalog();
        let totals = compute_totals(&selections, &professions);

        assert!(!totals.contains_key("Gloves"));
        assert_eq!(totals["Mask"].total_quantity, 2.0);

        let contributions = compute_contributions(&selections, &professions, "Mask");
        assert_eq!(contributions.len(), 1);
        assert_eq!(contributions[0].profession_name, "Operator");
    }

    #[test]
    fn test_empty_selection_list_gives_empty_totals() {
        assert!(compute_totals(&[], &catalog()).is_empty());
        assert!(compute_totals(&[Selection::new("Welder", 1)], &[]).is_empty());
    }

    #[test]
    fn test_totals_do_not_depend_on_selection_order() {
        let professions = catalog();
        let selections = vec![
            Selection::new("Welder", 2),
            Selection::new("Operator", 3),
            Selection::new("Welder", 1),
            Selection::new("Ghost", 7),
        ];
        let expected = compute_totals(&selections, &professions);

        let mut reversed = selections.clone();
        reversed.reverse();
        let mut rotated = selections.clone();
        rotated.rotate_left(2);

        // единицы всех позиций в этой выборке согласованы
        assert_eq!(compute_totals(&reversed, &professions), expected);
        assert_eq!(compute_totals(&rotated, &professions), expected);
        assert_eq!(compute_totals(&selections, &professions), expected);
    }

    #[test]
    fn test_fractional_norms_sum_the_same_in_any_order() {
        let professions = vec![
            Profession::new("A", vec![PpeItem::new("Soap", "pcs", 0.1)]),
            Profession::new("B", vec![PpeItem::new("Soap", "pcs", 0.2)]),
            Profession::new("C", vec![PpeItem::new("Soap", "pcs", 0.3)]),
        ];
        let forward = vec![
            Selection::new("A", 1),
            Selection::new("B", 1),
            Selection::new("C", 1),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let forward_totals = compute_totals(&forward, &professions);
        let reversed_totals = compute_totals(&reversed, &professions);

        assert_eq!(forward_totals, reversed_totals);
        assert_eq!(forward_totals["Soap"].total_quantity, 0.6);

        let sum: f64 = compute_contributions(&forward, &professions, "Soap")
            .iter()
            .map(|c| c.subtotal)
            .sum();
        assert!((sum - forward_totals["Soap"].total_quantity).abs() < 1e-9);
    }

    #[test]
    fn test_unit_of_first_selection_wins() {
        let professions = catalog();
        let welder_first = vec![Selection::new("Welder", 1), Selection::new("Electrician", 1)];
        let electrician_first = vec![Selection::new("Electrician", 1), Selection::new("Welder", 1)];

        assert_eq!(compute_totals(&welder_first, &professions)["Gloves"].unit, "pair");
        assert_eq!(compute_totals(&electrician_first, &professions)["Gloves"].unit, "pcs");
        assert_eq!(
            compute_totals(&welder_first, &professions)["Gloves"].total_quantity,
            5.0
        );
    }

    #[test]
    fn test_contributions_follow_selection_order() {
        let selections = vec![
            Selection::new("Operator", 2),
            Selection::new("Welder", 3),
            Selection::new("Operator", 1),
        ];
        let contributions = compute_contributions(&selections, &catalog(), "Mask");

        assert_eq!(
            contributions,
            vec![
                Contribution {
                    profession_name: "Operator".into(),
                    headcount: 2,
                    quantity_per_employee: 2.0,
                    subtotal: 4.0,
                },
                Contribution {
                    profession_name: "Welder".into(),
                    headcount: 3,
                    quantity_per_employee: 1.0,
                    subtotal: 3.0,
                },
                Contribution {
                    profession_name: "Operator".into(),
                    headcount: 1,
                    quantity_per_employee: 2.0,
                    subtotal: 2.0,
                },
            ]
        );
    }

    #[test]
    fn test_contributions_reconcile_with_totals_on_builtin_norms() {
        let catalog = NormsCatalog::builtin();
        let professions = catalog.professions(PERIOD_SEPTEMBER);
        let selections: Vec<Selection> = professions
            .iter()
            .enumerate()
            .map(|(i, p)| Selection::new(p.name.clone(), i as u32 + 1))
            .chain(std::iter::once(Selection::new("Несуществующая", 5)))
            .collect();

        let totals = compute_totals(&selections, professions);
        assert!(!totals.is_empty());
        for (item_name, total) in &totals {
            let sum: f64 = compute_contributions(&selections, professions, item_name)
                .iter()
                .map(|c| c.subtotal)
                .sum();
            assert_eq!(sum, total.total_quantity, "item {}", item_name);
        }
    }

    #[test]
    fn test_breakdown_is_sorted_and_complete() {
        let selections = vec![Selection::new("Operator", 1), Selection::new("Welder", 1)];
        let breakdown = compute_breakdown(&selections, &catalog());

        let names: Vec<&str> = breakdown.iter().map(|b| b.item_name.as_str()).collect();
        assert_eq!(names, vec!["Gloves", "Mask", "Soap"]);
        assert_eq!(breakdown[1].contributions.len(), 2);
        assert_eq!(breakdown[1].total.total_quantity, 3.0);
    }
}
