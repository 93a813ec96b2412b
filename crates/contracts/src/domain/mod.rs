pub mod a001_norms_catalog;
pub mod a002_selection;
pub mod common;
