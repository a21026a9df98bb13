//! Shared domain types for Helpdesk.
//!
//! This crate contains the types passed between the retrieval engine, the
//! HTTP layer, and the CLI: FAQ packs, reply payloads, configuration, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod faq;
pub mod reply;
