//! Выгрузка итоговой потребности в текстовый файл

use super::totals::PpeTotals;
use thiserror::Error;

pub const REPORT_TITLE: &str = "Итоговая потребность в СИЗ";
pub const FILE_PREFIX: &str = "potrebnost_siz_";
pub const FILE_EXTENSION: &str = ".txt";

const SEPARATOR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Нет данных для сохранения. Пожалуйста, выберите профессии и укажите количество сотрудников.")]
    NothingToExport,
}

/// Готовый к скачиванию файл
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

/// Количество без дробной части, если оно целое ("6", а не "6.0")
pub fn format_quantity(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Текст отчета: шапка с периодом и по строке на позицию в алфавитном порядке
pub fn render_report(period: &str, totals: &PpeTotals) -> Result<String, ExportError> {
    if totals.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let header = format!(
        "{}\nПериод: {}\n{}\n\n",
        REPORT_TITLE,
        period,
        "-".repeat(SEPARATOR_WIDTH)
    );

    // PpeTotals — BTreeMap, поэтому строки уже отсортированы по наименованию
    let lines: Vec<String> = totals
        .iter()
        .map(|(name, item)| {
            format!(
                "- {}: {} {}",
                name,
                format_quantity(item.total_quantity),
                item.unit
            )
        })
        .collect();

    Ok(header + &lines.join("\n"))
}

/// Имя файла: период в нижнем регистре, всё кроме `[a-z0-9-]` заменяется на `_`
pub fn export_file_name(period: &str) -> String {
    let sanitized: String = period
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}{}", FILE_PREFIX, sanitized, FILE_EXTENSION)
}

pub fn export_report(period: &str, totals: &PpeTotals) -> Result<ExportFile, ExportError> {
    Ok(ExportFile {
        file_name: export_file_name(period),
        content: render_report(period, totals)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_calculate_ppe::totals::TotalPpeItem;

    fn totals() -> PpeTotals {
        let mut totals = PpeTotals::new();
        totals.insert(
            "Mask".into(),
            TotalPpeItem {
                unit: "pcs".into(),
                total_quantity: 4.0,
            },
        );
        totals.insert(
            "Gloves".into(),
            TotalPpeItem {
                unit: "pair".into(),
                total_quantity: 6.0,
            },
        );
        totals
    }

    #[test]
    fn test_render_report_sorted_lines() {
        let report = render_report("Сентябрь", &totals()).unwrap();
        let expected = format!(
            "Итоговая потребность в СИЗ\nПериод: Сентябрь\n{}\n\n- Gloves: 6 pair\n- Mask: 4 pcs",
            "-".repeat(40)
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_totals_is_not_exported() {
        assert_eq!(
            render_report("Сентябрь", &PpeTotals::new()),
            Err(ExportError::NothingToExport)
        );
        assert!(export_report("Сентябрь", &PpeTotals::new()).is_err());
    }

    #[test]
    fn test_file_name_sanitization() {
        assert_eq!(export_file_name("Сентябрь"), "potrebnost_siz_________.txt");
        assert_eq!(
            export_file_name("Октябрь-Ноябрь"),
            "potrebnost_siz________-______.txt"
        );
        assert_eq!(export_file_name("Q3 2024-A"), "potrebnost_siz_q3_2024-a.txt");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(6.0), "6");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(1.5), "1.5");
    }

    #[test]
    fn test_fractional_totals_print_without_noise() {
        use crate::domain::a001_norms_catalog::{PpeItem, Profession};
        use crate::domain::a002_selection::Selection;
        use crate::usecases::u501_calculate_ppe::totals::compute_totals;

        let professions = vec![
            Profession::new("A", vec![PpeItem::new("Soap", "pcs", 0.1)]),
            Profession::new("B", vec![PpeItem::new("Soap", "pcs", 0.2)]),
            Profession::new("C", vec![PpeItem::new("Soap", "pcs", 0.3)]),
        ];
        let selections = vec![
            Selection::new("A", 1),
            Selection::new("B", 1),
            Selection::new("C", 1),
        ];

        let report = render_report("Q1", &compute_totals(&selections, &professions)).unwrap();
        assert!(report.ends_with("- Soap: 0.6 pcs"), "{}", report);
    }
}
