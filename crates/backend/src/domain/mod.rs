pub mod a001_norms_catalog;
