//! Core domain + application logic for the Xarajat expense bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the
//! Supabase backend live behind ports (traits) implemented in adapter
//! crates.

pub mod amount;
pub mod classify;
pub mod config;
pub mod domain;
pub mod errors;
pub mod expense;
pub mod formatting;
pub mod interpret;
pub mod logging;
pub mod period;
pub mod store;
pub mod summary;

pub use errors::{Error, Result};
