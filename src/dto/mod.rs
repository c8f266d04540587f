pub mod catalog;
pub mod products;
