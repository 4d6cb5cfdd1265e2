//! Kizuna - a terminal client for a bilingual social network.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod input;
pub mod media;
pub mod models;
pub mod seed;
pub mod state;
pub mod store;
pub mod tasks;
pub mod telemetry;
pub mod terminal;
pub mod traits;
pub mod translation;
pub mod ui;
pub mod widgets;
