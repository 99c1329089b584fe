//! Preferences loader and schema types.
//!
//! This module exposes the preferences schema used to drive notification
//! behavior and helpers to load preferences from disk.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
