pub mod error;
pub mod executor;
pub mod prompt;

pub use error::NormsImportError;
pub use executor::ImportExecutor;
pub use prompt::ImportDocument;
