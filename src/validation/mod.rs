// src/validation/mod.rs

//! Consistency checks over simulation state and measurement histograms.

use crate::core::{QirsError, StateVector};
use crate::simulation::MeasurementCounts;

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the state vector is normalized (sum of squared amplitudes
/// ≈ 1.0). Every gate in the circuit vocabulary is unitary, so a drift
/// beyond tolerance indicates engine breakage rather than user input.
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0 (e.g. 1e-9). Defaults are available.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QirsError::ExecutionError)` if normalization fails.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QirsError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.vector().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QirsError::ExecutionError {
            message: format!(
                "state vector normalization failed: Sum(|c_i|^2) = {} (deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks the two invariants a measurement histogram must satisfy: counts
/// sum exactly to the shot total, and every recorded bitstring has the
/// same width (the expected width if one is given, otherwise whatever
/// width the first key sets).
///
/// # Arguments
/// * `counts` - The histogram to check.
/// * `shots` - The number of shots the counts must sum to.
/// * `width` - Optional required bitstring width (number of measured qubits).
///
/// # Returns
/// * `Ok(())` if both invariants hold.
/// * `Err(QirsError::ExecutionError)` otherwise.
pub fn check_counts(
    counts: &MeasurementCounts,
    shots: u64,
    width: Option<usize>,
) -> Result<(), QirsError> {
    let total: u64 = counts.counts().values().sum();
    if total != shots || counts.shots() != shots {
        return Err(QirsError::ExecutionError {
            message: format!(
                "measurement counts sum to {} (recorded {}), expected exactly {}",
                total,
                counts.shots(),
                shots
            ),
        });
    }

    let expected_width = width.or_else(|| counts.counts().keys().next().map(|bits| bits.len()));
    if let Some(expected_width) = expected_width {
        for bits in counts.counts().keys() {
            if bits.len() != expected_width {
                return Err(QirsError::ExecutionError {
                    message: format!(
                        "bitstring '{}' has width {}, expected {}",
                        bits,
                        bits.len(),
                        expected_width
                    ),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::collections::HashMap;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn normalized_state_passes() {
        let state = StateVector::new(vec![
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(0.0, FRAC_1_SQRT_2),
        ]);
        assert!(check_normalization(&state, None).is_ok());
    }

    #[test]
    fn unnormalized_state_fails() {
        let state = StateVector::new(vec![Complex::new(0.5, 0.0), Complex::new(0.5, 0.0)]);
        match check_normalization(&state, None) {
            Err(QirsError::ExecutionError { .. }) => {}
            other => panic!("expected ExecutionError, got {:?}", other),
        }
    }

    #[test]
    fn counts_invariants_hold_and_fail() {
        let counts = MeasurementCounts::from_counts(HashMap::from([
            ("00".to_string(), 600),
            ("11".to_string(), 424),
        ]));
        assert!(check_counts(&counts, 1024, Some(2)).is_ok());
        // Wrong total
        assert!(check_counts(&counts, 1000, Some(2)).is_err());
        // Wrong width
        assert!(check_counts(&counts, 1024, Some(3)).is_err());

        // Mixed widths fail even without an expected width
        let ragged = MeasurementCounts::from_counts(HashMap::from([
            ("00".to_string(), 1),
            ("111".to_string(), 1),
        ]));
        assert!(check_counts(&ragged, 2, None).is_err());
    }
}
