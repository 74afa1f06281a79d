//! Locale-tolerant normalization of raw scale answers.
//!
//! The questionnaire UI submits values like `"0,75"` (Indonesian decimal
//! comma) or `"0.75"`. Anything that does not parse to a finite number is
//! worth zero evidence. Fail-soft: this stage never errors.

/// Clamp into [0,1]; NaN counts as zero evidence.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Parse one raw answer string into a certainty in [0,1].
///
/// Accepts `,` or `.` as the decimal separator. Unparseable or non-finite
/// input degrades to `0.0` rather than erroring.
pub fn parse_scale_value(raw: &str) -> f64 {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => clamp01(v),
        _ => 0.0,
    }
}
