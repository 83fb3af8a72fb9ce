//! Configuration types
//!
//! Board-agnostic tuning values. The firmware embeds a `clock.toml` and
//! parses it with [`parse_config`]; every field defaults to the factory
//! tuning.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
