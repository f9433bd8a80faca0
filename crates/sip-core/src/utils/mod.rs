//! Utility functions and helpers.

pub mod date;

pub use date::{format_review_date, review_date};
