use axum::{extract::Path, Json};

use crate::domain::a001_norms_catalog;
use contracts::domain::a001_norms_catalog::PeriodNorms;

/// GET /api/norms
pub async fn list_all() -> Json<Vec<PeriodNorms>> {
    Json(a001_norms_catalog::service::list_all())
}

/// GET /api/norms/:period
pub async fn get_by_period(
    Path(period): Path<String>,
) -> Result<Json<PeriodNorms>, axum::http::StatusCode> {
    match a001_norms_catalog::service::get_by_period(&period) {
        Some(v) => Ok(Json(v)),
        None => Err(axum::http::StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_norms_catalog::{PERIOD_OCTOBER_NOVEMBER, PERIOD_SEPTEMBER};

    #[tokio::test]
    async fn test_list_all_returns_builtin_periods() {
        let Json(periods) = list_all().await;
        let names: Vec<_> = periods.iter().map(|p| p.period.as_str()).collect();
        assert!(names.contains(&PERIOD_SEPTEMBER));
        assert!(names.contains(&PERIOD_OCTOBER_NOVEMBER));
    }

    #[tokio::test]
    async fn test_get_by_period() {
        let Json(period) = get_by_period(Path(PERIOD_SEPTEMBER.to_string()))
            .await
            .unwrap();
        assert_eq!(period.period, PERIOD_SEPTEMBER);

        let missing = get_by_period(Path("Декабрь".to_string())).await;
        assert_eq!(missing.unwrap_err(), axum::http::StatusCode::NOT_FOUND);
    }
}
