pub mod aggregate;
pub mod builtin;
pub mod validation;

pub use aggregate::{find_profession, NormsCatalog, PeriodNorms, PpeItem, Profession};
pub use builtin::{PERIOD_OCTOBER_NOVEMBER, PERIOD_SEPTEMBER};
pub use validation::{parse_professions_json, validate_professions, CatalogValidationError};
