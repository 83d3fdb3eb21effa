//! Record service: validation, identifier assignment and CRUD over the store.

mod developers;
mod validation;

pub use developers::*;
pub use validation::{Rule, Violation};
