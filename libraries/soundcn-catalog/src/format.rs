//! Display formatting for entry metadata

/// `0.4213` -> `"0.42s"`
pub fn format_duration(seconds: f64) -> String {
    format!("{seconds:.2}s")
}

/// `12` -> `"12KB"`
pub fn format_size_kb(size_kb: u32) -> String {
    format!("{size_kb}KB")
}
