//! Generic `key.path=value` overrides applied to the raw TOML table.

use toml::{value::Table, Value};

use crate::ConfigError;

/// Splits `a.b.c=value` into its key path and a TOML value.
///
/// The value is read as a TOML value, so `true`, `42` and `"2024"` keep their
/// TOML types. Anything that isn't valid TOML is taken as a bare string.
pub fn parse_override(s: &str) -> Result<(String, Value), ConfigError> {
    let (path, raw) = s
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidOverride(s.to_owned()))?;

    let path = path.trim();
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return Err(ConfigError::InvalidOverride(s.to_owned()));
    }

    Ok((path.to_owned(), parse_value(raw.trim())))
}

fn parse_value(raw: &str) -> Value {
    toml::from_str::<Table>(&format!("v = {raw}"))
        .ok()
        .and_then(|mut table| table.remove("v"))
        .unwrap_or_else(|| Value::String(raw.to_owned()))
}

/// Sets `val` at the dotted `path`, creating intermediate tables as needed.
pub fn apply_override(path: &str, val: Value, table: &mut Table) -> Result<(), ConfigError> {
    match path.split_once('.') {
        None => {
            table.insert(path.to_owned(), val);
            Ok(())
        }
        Some((key, rest)) => {
            let entry = table
                .entry(key.to_owned())
                .or_insert(Value::Table(Table::new()));

            match entry {
                Value::Table(sub) => apply_override(rest, val, sub),
                _ => Err(ConfigError::TraverseNonTableAt {
                    key: key.to_owned(),
                    path: path.to_owned(),
                }),
            }
        }
    }
}
