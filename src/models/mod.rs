//! Diesel row types and their conversions to and from domain entities.

pub mod category;
pub mod component;
pub mod product;
pub mod production_history;
pub mod series;
pub mod unit;

#[cfg(feature = "app")]
pub mod config;
