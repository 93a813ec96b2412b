use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID строки выбора профессии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionId(pub Uuid);

impl SelectionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for SelectionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SelectionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Выбранная пользователем пара (профессия, численность).
///
/// Профессия хранится по имени, а не ссылкой: после смены периода имя может
/// не найтись в новом списке, это штатное состояние.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub id: SelectionId,
    pub profession_name: String,
    pub headcount: u32,
}

impl Selection {
    pub fn new(profession_name: impl Into<String>, headcount: u32) -> Self {
        Self {
            id: SelectionId::new_v4(),
            profession_name: profession_name.into(),
            headcount,
        }
    }

    /// Строка по умолчанию: указанная профессия, один сотрудник
    pub fn with_default_headcount(profession_name: impl Into<String>) -> Self {
        Self::new(profession_name, 1)
    }

    /// Численность из пользовательского ввода: отрицательные значения обнуляются
    pub fn set_headcount_clamped(&mut self, value: i64) {
        self.headcount = value.clamp(0, u32::MAX as i64) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_selection_ids_are_unique() {
        let a = Selection::with_default_headcount("Welder");
        let b = Selection::with_default_headcount("Welder");
        assert_ne!(a.id, b.id);
        assert_eq!(a.headcount, 1);
    }

    #[test]
    fn test_headcount_is_clamped() {
        let mut s = Selection::new("Welder", 3);
        s.set_headcount_clamped(-5);
        assert_eq!(s.headcount, 0);
        s.set_headcount_clamped(12);
        assert_eq!(s.headcount, 12);
    }

    #[test]
    fn test_selection_id_roundtrip_through_string() {
        let id = SelectionId::new_v4();
        assert_eq!(SelectionId::from_string(&id.as_string()), Ok(id));
        assert!(SelectionId::from_string("nope").is_err());
    }
}
