//! # Clientbook Architecture
//!
//! Clientbook is a small customer record manager: a collection of clients kept
//! in memory, persisted as one JSON file, with add / update / delete, search
//! and sort on top. The library is UI-agnostic; the `clientbook` binary is just
//! one front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, interactive menu, scripted demo             │
//! │  - Input validation (phone shape, amounts, dates)           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the loaded collection                 │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (commands/*.rs)                              │
//! │  - Pure functions over a caller-owned Vec<Client>           │
//! │  - No I/O whatsoever                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (JSON file), InMemoryStore (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Hidden State
//!
//! The core keeps nothing in globals. The data file path is configuration
//! handed to [`store::fs::FileStore`] (or straight to
//! [`store::load_clients`] / [`store::save_clients`]), and every service
//! function takes the collection it works on as an argument.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Add, modify, delete, search, sort and friends
//! - [`store`]: Storage abstraction, JSON file store and on-disk schema
//! - [`model`]: `Client`, `Purchase`, total spend
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
