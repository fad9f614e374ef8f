//! Output formatting for subnet data.
//!
//! This module handles formatting and outputting subnet data:
//! - [`csv`] - CSV output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

pub use csv::{format_csv_row, subnet_csv, subnet_print};
pub use terminal::{format_field, format_tree, print_tree};
