pub mod catalog;
pub mod errors;
pub mod production_history;
pub mod products;

pub use errors::{ServiceError, ServiceResult};
