//! Import adapters.
//!
//! Both formats normalise to [`SubnetRecord`] before anything is validated:
//! - [`text`] - one `<cidr> [description] [#color]` per line
//! - [`json`] - array of `{cidr, description, color}` objects

mod json;
mod text;

use crate::error::Result;
use crate::models::SubnetRecord;
use std::path::Path;

pub use json::{parse_subnet_json, to_subnet_json};
pub use text::{parse_subnet_text, to_subnet_text};

/// Read records from a file, choosing the adapter by extension.
///
/// `.json` files go through the JSON adapter, anything else is treated as text.
pub fn read_subnet_file<P: AsRef<Path>>(path: P) -> Result<Vec<SubnetRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    log::info!("Reading subnets from file: {}", path.display());

    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        parse_subnet_json(&content)
    } else {
        Ok(parse_subnet_text(&content))
    }
}
