//! Human-readable size formatting

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with the largest unit keeping the value below 1024,
/// rounded to two decimals with trailing zeros trimmed.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut order = 0;

    while size >= 1024.0 && order < UNITS.len() - 1 {
        size /= 1024.0;
        order += 1;
    }

    let rendered = format!("{:.2}", size);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rendered, UNITS[order])
}
