// src/operations/mod.rs

//! Defines the gate-level operations the entangler circuit is built from.
//!
//! The demo's circuit vocabulary is intentionally small: a single-qubit
//! superposition gate, a two-qubit entangling gate, and one terminal
//! measurement. The simulation engine interprets these against the joint
//! `StateVector`.

// Import necessary types from the core module
use crate::core::QubitId;

/// A single step in a circuit.
///
/// Operations act on the joint state vector inside the simulation engine.
/// Order matters for `Entangle`: entangling gates on overlapping qubits do
/// not commute, so the circuit's operation sequence is part of its meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Puts a single qubit into an equal superposition of its basis states
    /// (a Hadamard gate). Applied to every qubit of the entangler topology;
    /// order across distinct qubits is immaterial for the resulting
    /// distribution, but each qubit receives it exactly once.
    Superpose {
        /// The qubit rotated into superposition.
        target: QubitId,
    },

    /// A controlled-NOT linking two qubits: the target's quality flips
    /// exactly when the control is set. Direction is part of the contract;
    /// swapping control and target changes the correlations the histogram
    /// shows.
    Entangle {
        /// The qubit whose state conditions the flip.
        control: QubitId,
        /// The qubit that is flipped when the control is set.
        target: QubitId,
    },

    /// Measures every listed qubit into a classical bit of the same index,
    /// as a single simultaneous measurement event. The demo circuit has
    /// exactly one of these, at the end, covering all qubits.
    Measure {
        /// The qubits whose states are resolved.
        targets: Vec<QubitId>,
    },
}

impl Operation {
    /// Returns all qubit ids mentioned in the operation's parameters.
    /// The circuit uses this to register which qubits it spans.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Operation::Superpose { target } => vec![*target],
            Operation::Entangle { control, target } => vec![*control, *target],
            Operation::Measure { targets } => targets.clone(),
        }
    }
}
