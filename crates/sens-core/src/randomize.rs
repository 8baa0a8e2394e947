use rand::Rng;

/// Uniform random sensitivity in `[lower, upper]`, rounded to 3 decimal
/// digits.
pub fn random_sensitivity(lower: f64, upper: f64) -> f64 {
    let raw = rand::thread_rng().gen_range(lower..=upper);
    round3(raw)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
