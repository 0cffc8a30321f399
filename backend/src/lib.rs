//! Gardenlog backend: a small actix-web application for tracking garden
//! plants and the harvests taken from them, backed by MongoDB.
//!
//! The binary in `main.rs` is a thin shell around these modules so the
//! integration tests can assemble the same application.

pub mod config;
pub mod db;
pub mod error;
pub mod render;
pub mod services;
pub mod state;
