//! Utility functions for formatting values for display.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{format_date, format_money, format_phone, truncate_string};
