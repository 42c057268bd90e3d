//! Human readable formatting for counts and sizes

use byte_unit::{Byte, UnitType};

/// Format a byte count with a binary unit, e.g. `858.31 MiB`.
///
/// Sizes beyond `u64::MAX` are clamped.
pub fn format_file_size(bytes: u128) -> String {
    let bytes = u64::try_from(bytes).unwrap_or(u64::MAX);
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    format!("{:.2}", adjusted)
}

/// Format a count with `,` thousands separators
pub fn format_count(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}
