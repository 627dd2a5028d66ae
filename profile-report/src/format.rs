//! Column formatting helpers shared by the console report and the text export

/// Right-aligned fixed-point number: `value` with `precision` decimals in a
/// field at least `width` characters wide. Negative zero prints as zero.
pub fn fixed(value: f64, width: usize, precision: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:>width$.precision$}")
}

/// Right-aligned integer in a field at least `width` characters wide
pub fn count(value: u64, width: usize) -> String {
    format!("{value:>width$}")
}

/// Left-aligned name padded with spaces to exactly `width` characters.
///
/// Longer names are cut at `width` characters (not bytes).
pub fn name_field(name: &str, width: usize) -> String {
    let truncated: String = name.chars().take(width).collect();
    format!("{truncated:<width$}")
}
