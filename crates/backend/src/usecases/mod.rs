pub mod u502_import_norms;
