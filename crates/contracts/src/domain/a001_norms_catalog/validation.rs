//! Проверка формы списка профессий, пришедшего из внешнего источника.
//!
//! Ответ извлечения никогда не принимается как есть: сначала JSON разбирается
//! в "сырые" структуры с необязательными полями, затем каждое поле проверяется,
//! и только после этого строятся [`Profession`].

use super::aggregate::{PpeItem, Profession};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogValidationError {
    #[error("Ответ не является корректным JSON: {0}")]
    Malformed(String),

    #[error("Список профессий пуст")]
    Empty,

    #[error("Профессия #{index}: не указано наименование")]
    MissingProfessionName { index: usize },

    #[error("Профессия \"{profession}\": отсутствует перечень СИЗ")]
    MissingItems { profession: String },

    #[error("Профессия \"{profession}\" указана более одного раза")]
    DuplicateProfession { profession: String },

    #[error("Профессия \"{profession}\", позиция #{index}: не указано поле {field}")]
    MissingItemField {
        profession: String,
        index: usize,
        field: &'static str,
    },

    #[error("Профессия \"{profession}\", позиция \"{item}\": недопустимое количество {quantity}")]
    InvalidQuantity {
        profession: String,
        item: String,
        quantity: f64,
    },
}

#[derive(Debug, Deserialize)]
struct RawProfession {
    name: Option<String>,
    items: Option<Vec<RawItem>>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    name: Option<String>,
    unit: Option<String>,
    quantity: Option<f64>,
}

/// Разобрать JSON-массив `[{name, items: [{name, unit, quantity}]}]` и проверить его форму
pub fn parse_professions_json(json: &str) -> Result<Vec<Profession>, CatalogValidationError> {
    let raw: Vec<RawProfession> =
        serde_json::from_str(json).map_err(|e| CatalogValidationError::Malformed(e.to_string()))?;

    let mut professions = Vec::with_capacity(raw.len());
    for (index, raw_profession) in raw.into_iter().enumerate() {
        professions.push(convert_profession(index, raw_profession)?);
    }

    validate_professions(&professions)?;
    Ok(professions)
}

fn convert_profession(index: usize, raw: RawProfession) -> Result<Profession, CatalogValidationError> {
    let name = non_blank(raw.name)
        .ok_or(CatalogValidationError::MissingProfessionName { index: index + 1 })?;

    let raw_items = raw.items.ok_or_else(|| CatalogValidationError::MissingItems {
        profession: name.clone(),
    })?;

    let mut items = Vec::with_capacity(raw_items.len());
    for (item_index, raw_item) in raw_items.into_iter().enumerate() {
        let missing = |field: &'static str| CatalogValidationError::MissingItemField {
            profession: name.clone(),
            index: item_index + 1,
            field,
        };
        let item_name = non_blank(raw_item.name).ok_or_else(|| missing("name"))?;
        let unit = non_blank(raw_item.unit).ok_or_else(|| missing("unit"))?;
        let quantity = raw_item.quantity.ok_or_else(|| missing("quantity"))?;
        items.push(PpeItem::new(item_name, unit, quantity));
    }

    Ok(Profession::new(name, items))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Проверить уже построенный список профессий перед заменой норм периода
pub fn validate_professions(professions: &[Profession]) -> Result<(), CatalogValidationError> {
    if professions.is_empty() {
        return Err(CatalogValidationError::Empty);
    }

    let mut seen = HashSet::new();
    for (index, profession) in professions.iter().enumerate() {
        if profession.name.trim().is_empty() {
            return Err(CatalogValidationError::MissingProfessionName { index: index + 1 });
        }
        if !seen.insert(profession.name.as_str()) {
            return Err(CatalogValidationError::DuplicateProfession {
                profession: profession.name.clone(),
            });
        }
        if profession.items.is_empty() {
            return Err(CatalogValidationError::MissingItems {
                profession: profession.name.clone(),
            });
        }
        for (item_index, item) in profession.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(CatalogValidationError::MissingItemField {
                    profession: profession.name.clone(),
                    index: item_index + 1,
                    field: "name",
                });
            }
            if item.unit.trim().is_empty() {
                return Err(CatalogValidationError::MissingItemField {
                    profession: profession.name.clone(),
                    index: item_index + 1,
                    field: "unit",
                });
            }
            if !item.quantity.is_finite() || item.quantity < 0.0 {
                return Err(CatalogValidationError::InvalidQuantity {
                    profession: profession.name.clone(),
                    item: item.name.clone(),
                    quantity: item.quantity,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let json = r#"[
            {"name": "Welder", "items": [{"name": "Gloves", "unit": "pair", "quantity": 2}]},
            {"name": "Operator", "items": [{"name": "Mask", "unit": "pcs", "quantity": 0}]}
        ]"#;
        let professions = parse_professions_json(json).unwrap();
        assert_eq!(professions.len(), 2);
        assert_eq!(professions[0].items[0], PpeItem::new("Gloves", "pair", 2.0));
        assert_eq!(professions[1].items[0].quantity, 0.0);
    }

    #[test]
    fn test_missing_items_is_rejected() {
        let json = r#"[{"name": "Welder"}]"#;
        assert_eq!(
            parse_professions_json(json),
            Err(CatalogValidationError::MissingItems {
                profession: "Welder".into()
            })
        );
    }

    #[test]
    fn test_empty_items_is_rejected() {
        let json = r#"[{"name": "Welder", "items": []}]"#;
        assert!(matches!(
            parse_professions_json(json),
            Err(CatalogValidationError::MissingItems { .. })
        ));
    }

    #[test]
    fn test_blank_names_and_units_are_rejected() {
        let json = r#"[{"name": "  ", "items": [{"name": "Gloves", "unit": "pair", "quantity": 1}]}]"#;
        assert_eq!(
            parse_professions_json(json),
            Err(CatalogValidationError::MissingProfessionName { index: 1 })
        );

        let json = r#"[{"name": "Welder", "items": [{"name": "Gloves", "quantity": 1}]}]"#;
        assert!(matches!(
            parse_professions_json(json),
            Err(CatalogValidationError::MissingItemField { field: "unit", .. })
        ));
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let json = r#"[{"name": "Welder", "items": [{"name": "Gloves", "unit": "pair", "quantity": -1}]}]"#;
        assert!(matches!(
            parse_professions_json(json),
            Err(CatalogValidationError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_duplicate_profession_is_rejected() {
        let json = r#"[
            {"name": "Welder", "items": [{"name": "Gloves", "unit": "pair", "quantity": 1}]},
            {"name": "Welder", "items": [{"name": "Mask", "unit": "pcs", "quantity": 1}]}
        ]"#;
        assert!(matches!(
            parse_professions_json(json),
            Err(CatalogValidationError::DuplicateProfession { .. })
        ));
    }

    #[test]
    fn test_non_array_and_empty_payloads() {
        assert!(matches!(
            parse_professions_json(r#"{"name": "Welder"}"#),
            Err(CatalogValidationError::Malformed(_))
        ));
        assert!(matches!(
            parse_professions_json("not json"),
            Err(CatalogValidationError::Malformed(_))
        ));
        assert_eq!(parse_professions_json("[]"), Err(CatalogValidationError::Empty));
    }

    #[test]
    fn test_string_quantity_is_malformed() {
        let json = r#"[{"name": "Welder", "items": [{"name": "Gloves", "unit": "pair", "quantity": "2"}]}]"#;
        assert!(matches!(
            parse_professions_json(json),
            Err(CatalogValidationError::Malformed(_))
        ));
    }
}
