//! Terminal and NDJSON rendering for ngtw commands
//!
//! Library code reports results and events as values; everything the user
//! sees is formatted here.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
