//! Settings schema and loading.
//!
//! Covers the header text, scrub step, initial playback toggles and the
//! library scanner knobs, sourced from an optional TOML file with
//! environment-variable overrides.

mod load;
mod schema;

pub use schema::*;
