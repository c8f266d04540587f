//! Core library exports for PriceMaster.
//!
//! The `data` feature exposes the domain types, Diesel models and
//! repositories. The `app` feature adds forms, services and DTOs used by the
//! console entry point.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "app")]
pub mod dto;
#[cfg(feature = "app")]
pub mod error_conversions;
#[cfg(feature = "app")]
pub mod forms;
#[cfg(feature = "app")]
pub mod services;
