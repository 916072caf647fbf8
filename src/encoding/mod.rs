// src/encoding/mod.rs

//! Classical Reed–Solomon teaching math: Singleton-bound distance and
//! polynomial-evaluation codewords.
//!
//! Everything here is deliberately *not* a real error-correcting code.
//! Evaluation happens in ordinary integer arithmetic instead of a finite
//! field, and the codeword carries exactly two symbols of redundancy.
//! Both simplifications are the documented teaching behavior and must be
//! preserved; do not "fix" this into GF(2^m) arithmetic.

use crate::core::QirsError;
use std::fmt;

/// Parameters of an `RS(n, k)` block code.
///
/// Holds a codeword length `n` and message length `k` that already satisfy
/// the input-boundary constraints, so the derived minimum distance is
/// always well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeParameters {
    n: u64,
    k: u64,
}

impl CodeParameters {
    /// Creates code parameters, enforcing `n >= 2` and `1 <= k <= n - 1`.
    ///
    /// These are the same bounds the interactive inputs enforce; a caller
    /// that bypasses them gets `QirsError::InvalidParameter` rather than a
    /// nonsensical distance.
    pub fn new(n: u64, k: u64) -> Result<Self, QirsError> {
        if n < 2 {
            return Err(QirsError::InvalidParameter {
                message: format!("codeword length n must be at least 2, got {}", n),
            });
        }
        if k < 1 || k > n - 1 {
            return Err(QirsError::InvalidParameter {
                message: format!("message length k must satisfy 1 <= k <= n - 1 = {}, got {}", n - 1, k),
            });
        }
        Ok(Self { n, k })
    }

    /// Codeword length `n`.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Message length `k`.
    pub fn k(&self) -> u64 {
        self.k
    }

    /// Singleton-bound minimum distance `d = n - k + 1`.
    ///
    /// An MDS code meets this bound with equality, which is why the demo
    /// presents it as the distance of the RS code itself. `d >= 2` holds
    /// for every constructible `CodeParameters` since `k <= n - 1`.
    pub fn minimum_distance(&self) -> u64 {
        self.n - self.k + 1
    }
}

impl fmt::Display for CodeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RS({}, {}): minimum distance d = n - k + 1 = {}",
            self.n,
            self.k,
            self.minimum_distance()
        )
    }
}

/// Message symbols interpreted as polynomial coefficients `[a0, a1, ...]`,
/// lowest degree first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePolynomial {
    coefficients: Vec<i64>,
}

impl MessagePolynomial {
    /// Parses a comma-separated list of integer message symbols.
    ///
    /// Tokens are split on `,` and trimmed; every token must parse as an
    /// integer. Any malformed token (including an empty one, so `""` and
    /// `"1,,2"` both fail) aborts the whole parse with
    /// `QirsError::ParseError`. One coarse failure covers the entire
    /// parse, matching the demo's single failure banner; malformed tokens
    /// are never dropped.
    pub fn parse(input: &str) -> Result<Self, QirsError> {
        let coefficients = input
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<i64>().map_err(|_| QirsError::ParseError {
                    message: format!("message symbol '{}' is not a valid integer", token),
                })
            })
            .collect::<Result<Vec<i64>, QirsError>>()?;
        // `split` on a non-empty pattern always yields at least one token,
        // so a successful parse guarantees at least one coefficient.
        Ok(Self { coefficients })
    }

    /// Builds a polynomial directly from coefficients `[a0, a1, ...]`.
    /// Fails on an empty sequence; a message must carry at least one symbol.
    pub fn from_coefficients(coefficients: Vec<i64>) -> Result<Self, QirsError> {
        if coefficients.is_empty() {
            return Err(QirsError::InvalidParameter {
                message: "message polynomial requires at least one coefficient".to_string(),
            });
        }
        Ok(Self { coefficients })
    }

    /// The coefficients `[a0, a1, ...]`, lowest degree first.
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Polynomial degree (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates `m(x) = Σ a_i · x^i` at `x` by Horner's rule.
    ///
    /// Plain integer arithmetic, no modular reduction; this is the
    /// mathematically loose part of the demo. Widened to `i128` so
    /// evaluation never truncates for any inputs the demo can produce.
    pub fn evaluate(&self, x: i64) -> i128 {
        let x = x as i128;
        self.coefficients
            .iter()
            .rev()
            .fold(0i128, |acc, &c| acc * x + c as i128)
    }
}

impl fmt::Display for MessagePolynomial {
    /// Renders the symbolic polynomial as the demo shows it: every term as
    /// `{a_i}x^{i}` joined by ` + `, including the constant term as `a0x^0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{}x^{}", a, i))
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}

/// A codeword produced by evaluating a message polynomial at the fixed
/// point set `{1, 2, ..., m + 3}` for degree `m`.
///
/// That is two more evaluation points than the `m + 1` needed to determine
/// the polynomial, the demo's stand-in for codeword redundancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codeword {
    points: Vec<i64>,
    symbols: Vec<i128>,
}

impl Codeword {
    /// Encodes a message polynomial into its codeword.
    /// Deterministic; symbol `j` is `m(points[j])`.
    pub fn encode(message: &MessagePolynomial) -> Self {
        let points: Vec<i64> = (1..=message.coefficients().len() as i64 + 2).collect();
        let symbols = points.iter().map(|&x| message.evaluate(x)).collect();
        Self { points, symbols }
    }

    /// The evaluation points `1..=len`.
    pub fn points(&self) -> &[i64] {
        &self.points
    }

    /// The codeword symbols, one per evaluation point.
    pub fn symbols(&self) -> &[i128] {
        &self.symbols
    }

    /// Codeword length (always coefficient count + 2).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the codeword has no symbols. Cannot occur for a
    /// codeword built by `encode`, provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation points: {:?}", self.points)?;
        write!(f, "Codeword symbols:  {:?}", self.symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_bound_for_default_inputs() -> Result<(), QirsError> {
        // The demo's default inputs: RS(7, 3) -> d = 5.
        let params = CodeParameters::new(7, 3)?;
        assert_eq!(params.minimum_distance(), 5);
        Ok(())
    }

    #[test]
    fn distance_is_at_least_two_over_full_range() -> Result<(), QirsError> {
        for n in 2..=12 {
            for k in 1..n {
                let params = CodeParameters::new(n, k)?;
                assert_eq!(params.minimum_distance(), n - k + 1);
                assert!(params.minimum_distance() >= 2);
            }
        }
        Ok(())
    }

    #[test]
    fn out_of_range_parameters_are_rejected() {
        for (n, k) in [(1, 1), (7, 0), (7, 7), (7, 8), (2, 2)] {
            match CodeParameters::new(n, k) {
                Err(QirsError::InvalidParameter { .. }) => {}
                other => panic!("expected InvalidParameter for ({}, {}), got {:?}", n, k, other),
            }
        }
    }

    #[test]
    fn polynomial_renders_every_term_including_x0() -> Result<(), QirsError> {
        let poly = MessagePolynomial::parse("3,5,2")?;
        assert_eq!(poly.to_string(), "3x^0 + 5x^1 + 2x^2");
        Ok(())
    }

    #[test]
    fn horner_evaluation_matches_power_sum() -> Result<(), QirsError> {
        let poly = MessagePolynomial::parse("7,-4,0,9")?;
        for x in -6..=6 {
            let expected: i128 = poly
                .coefficients()
                .iter()
                .enumerate()
                .map(|(i, &a)| a as i128 * (x as i128).pow(i as u32))
                .sum();
            assert_eq!(poly.evaluate(x), expected, "mismatch at x = {}", x);
        }
        Ok(())
    }

    #[test]
    fn wide_coefficients_do_not_truncate() -> Result<(), QirsError> {
        // i64::MAX coefficients at x = 5 overflow i64 but not i128.
        let poly = MessagePolynomial::from_coefficients(vec![i64::MAX, i64::MAX])?;
        let expected = i64::MAX as i128 + 5 * i64::MAX as i128;
        assert_eq!(poly.evaluate(5), expected);
        Ok(())
    }
}
