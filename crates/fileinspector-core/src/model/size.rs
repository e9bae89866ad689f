/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Divides by 1024 until the value drops below 1024 (or `TB` is reached)
/// and always prints one decimal digit, bytes included: `"512.0 bytes"`,
/// `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let last = UNITS.len() - 1;
    for unit in &UNITS[..last] {
        if value < 1024.0 {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.1} {}", UNITS[last])
}

/// Units tried in order; the last one is used unconditionally.
const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
