pub mod export;
pub mod reconcile;
pub mod session;
pub mod totals;

pub use export::{export_file_name, export_report, format_quantity, render_report, ExportError, ExportFile};
pub use reconcile::on_period_change;
pub use session::CalculatorSession;
pub use totals::{
    compute_breakdown, compute_contributions, compute_totals, Contribution, ItemBreakdown,
    PpeTotals, TotalPpeItem,
};

use crate::usecases::common::UseCaseMetadata;

pub struct CalculatePpe;

impl UseCaseMetadata for CalculatePpe {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "calculate_ppe"
    }

    fn display_name() -> &'static str {
        "Калькулятор СИЗ"
    }

    fn description() -> &'static str {
        "Рассчитайте потребность в средствах индивидуальной защиты"
    }
}
