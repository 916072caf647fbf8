// src/core/state.rs

use num_complex::Complex;
use std::fmt;

/// The joint state of all qubits in a circuit *before* measurement.
///
/// A circuit over `n` qubits is represented by a dense vector of `2^n`
/// complex amplitudes, one per computational basis state. Basis index bits
/// follow the qubit order: the qubit with the smallest id occupies the
/// most significant bit of the index.
///
/// `Complex<f64>` is required because the entangler circuit passes through
/// genuine superpositions; real-valued amplitudes cannot express the
/// intermediate states of even the fixed pedagogical topology.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    /// Amplitudes over the computational basis, length `2^n`.
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Creates a new state from a given amplitude vector.
    /// The engine is responsible for only constructing normalized states;
    /// validation happens during simulation.
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitude vector.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Gets the dimension of the state (`2^n` for `n` qubits).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
