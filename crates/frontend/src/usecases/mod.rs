pub mod u501_calculate_ppe;
pub mod u502_import_norms;
