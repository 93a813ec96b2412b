//! Общие типы и чистая логика калькулятора СИЗ.
//!
//! Крейт собирается и для backend, и для frontend (WASM), поэтому здесь нет I/O.

pub mod domain;
pub mod usecases;
