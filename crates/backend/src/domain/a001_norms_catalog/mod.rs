pub mod repository;
pub mod service;

pub use repository::{NormsStore, NORMS_STORE};
