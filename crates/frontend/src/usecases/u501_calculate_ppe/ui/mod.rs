pub mod calculation_steps;
pub mod model;
pub mod profession_selector;
pub mod results_table;
pub mod view;
pub mod view_model;

pub use view::CalculatorPage;
