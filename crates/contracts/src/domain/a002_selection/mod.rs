pub mod aggregate;

pub use aggregate::{Selection, SelectionId};
