//! Встроенные нормы выдачи СИЗ

use super::aggregate::{NormsCatalog, PeriodNorms, PpeItem, Profession};

pub const PERIOD_SEPTEMBER: &str = "Сентябрь";
pub const PERIOD_OCTOBER_NOVEMBER: &str = "Октябрь-Ноябрь";

const STOKER: &str = "Машинист-кочегар";
const HEAT_GLOVES: &str = "Перчатки для защиты от повышенных температур";

fn september_professions() -> Vec<Profession> {
    vec![
        Profession::new(
            STOKER,
            vec![
                PpeItem::new("Перчатки с точечным покрытием", "пар", 1.0),
                PpeItem::new("Мыло туалетное 100 гр", "шт", 2.0),
                PpeItem::new("Респиратор-полумаска", "шт", 4.0),
                PpeItem::new("Рукавицы брезентовые с наладонником", "пар", 2.0),
                PpeItem::new("Крем гидрофильного действия 100мл/60", "шт", 1.0),
                PpeItem::new("Паста очищающая", "шт", 1.0),
                PpeItem::new(HEAT_GLOVES, "пар", 1.0),
                PpeItem::new("Крем GECO регенерирующий 100 мл", "шт", 1.0),
            ],
        ),
        Profession::new(
            "Слесарь – ремонтник",
            vec![
                PpeItem::new("Перчатки с точечным покрытием", "пар", 4.0),
                PpeItem::new("Мыло туалетное 100 гр", "шт", 2.0),
                PpeItem::new("Респиратор-полумаска", "шт", 4.0),
                PpeItem::new("Крем GECO регенерирующий 100 мл", "шт", 1.0),
            ],
        ),
        Profession::new(
            "Электрогазосварщик, занятый на резке и ручной сварке",
            vec![
                PpeItem::new("Краги спилковые", "пар", 1.0),
                PpeItem::new("Мыло туалетное 100 гр", "шт", 2.0),
                PpeItem::new("Респиратор-полумаска", "шт", 4.0),
                PpeItem::new("Паста очищающая", "шт", 1.0),
                PpeItem::new("Крем УФ", "шт", 1.0),
                PpeItem::new("Крем GECO регенерирующий 100 мл", "шт", 1.0),
            ],
        ),
        Profession::new(
            "Электромонтер по ремонту и обслуживанию электрооборудования",
            vec![
                PpeItem::new("Мыло туалетное 100 гр", "шт", 2.0),
                // В нормах электромонтера перчатки учитываются в штуках
                PpeItem::new("Перчатки с точечным покрытием", "шт", 2.0),
                PpeItem::new("Крем GECO регенерирующий 100 мл", "шт", 1.0),
            ],
        ),
        Profession::new(
            "Аппаратчик химводоочистки",
            vec![
                PpeItem::new("Перчатки с точечным покрытием", "пар", 1.0),
                PpeItem::new("Мыло туалетное 100 гр", "шт", 2.0),
                PpeItem::new("Крем гидрофобного действия 100мл/60", "шт", 1.0),
                PpeItem::new("Перчатки латексные", "пар", 1.0),
                PpeItem::new("Крем GECO регенерирующий 100 мл", "шт", 1.0),
            ],
        ),
    ]
}

/// Октябрь-ноябрь: как сентябрь, но кочегару не положены термостойкие перчатки
fn october_november_professions() -> Vec<Profession> {
    let mut professions = september_professions();
    if let Some(stoker) = professions.iter_mut().find(|p| p.name == STOKER) {
        stoker.items.retain(|i| i.name != HEAT_GLOVES);
    }
    professions
}

impl NormsCatalog {
    /// Справочник норм, с которым стартует приложение
    pub fn builtin() -> Self {
        NormsCatalog::new(vec![
            PeriodNorms {
                period: PERIOD_SEPTEMBER.to_string(),
                professions: september_professions(),
            },
            PeriodNorms {
                period: PERIOD_OCTOBER_NOVEMBER.to_string(),
                professions: october_november_professions(),
            },
        ])
    }
}
