//! Scalar position values.
//!
//! Every value is read from the canonical player's perspective and lives in
//! `[LOSS, WIN]`. Terminal outcomes and evaluator estimates share this scale.

/// A position value from the canonical player's perspective.
pub type Value = f64;

/// Proven win for the canonical player.
pub const WIN: Value = 1.0;

/// Proven loss for the canonical player.
pub const LOSS: Value = -1.0;

/// Drawn game.
pub const DRAW: Value = 0.0;

/// Clamp an arbitrary estimate onto the value scale.
///
/// NaN maps to `DRAW`.
#[must_use]
pub fn clamp_value(value: Value) -> Value {
    if value.is_nan() {
        DRAW
    } else {
        value.clamp(LOSS, WIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_value() {
        assert_eq!(clamp_value(0.25), 0.25);
        assert_eq!(clamp_value(3.0), WIN);
        assert_eq!(clamp_value(-7.5), LOSS);
        assert_eq!(clamp_value(f64::NAN), DRAW);
    }
}
