//! HTTP handlers

pub mod auth;
pub mod entries;
pub mod health;
pub mod images;
pub mod memory;

pub use health::health;
