// file: src/utils/format.rs
// description: scalar formatting for git config values
// reference: git-config value conventions

/// Decimal rendering of an optional count; absent values become "".
pub fn format_optional_int(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn format_bool(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
