//! Domain entities and value objects shared by the persistence and service layers.

pub mod category;
pub mod component;
pub mod product;
pub mod production_history;
pub mod report;
pub mod series;
pub mod types;
pub mod unit;
