//! # solfege-core
//!
//! Front-end facing layer over [`solfege_types`]: the call surface for loosely typed
//! tokens, TOML configuration, and query dispatch.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solfege_core::config::Config;
//! use solfege_core::dispatch::Engine;
//! use solfege_core::query::Query;
//!
//! let engine = Engine::new(Config::load());
//! let answer = engine.dispatch(&Query::Chord { chord: "Am".into() })?;
//! let line = engine.dispatch_line(r#"{"op":"frequency","note":"A4"}"#);
//! ```
//!
//! ## Module Overview
//!
//! - [`engine`] : the public call surface (`parse_chord`, `get_scale`, `get_frequency`, ...)
//!   over `serde_json::Value` tokens, so non-string input is rejected as a value
//! - [`query`] : `Query` / `Answer` / `Response` enums
//! - [`dispatch`] : `Engine`, which applies configuration and routes queries
//! - [`config`] : TOML configuration loading (embedded defaults + user override)

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod query;

pub use solfege_types as types;
