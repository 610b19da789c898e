//! Shared utilities: address helpers and advisory record inspection.

pub mod inspect;
pub mod ip_utils;

pub use inspect::{inspect_dataset, inspect_host, inspect_pool};
