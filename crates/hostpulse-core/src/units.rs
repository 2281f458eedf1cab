//! Unit conversion for memory figures.

const BYTES_PER_GIB: f64 = (1u64 << 30) as f64;

/// Bytes to binary gigabytes (1024^3), unrounded.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GIB
}

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Clamp a percentage into `[0, 100]`. NaN becomes 0.
pub fn clamp_percent(v: f64) -> f64 {
    if v.is_nan() {
        return 0.0;
    }
    v.clamp(0.0, 100.0)
}
