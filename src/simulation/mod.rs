// src/simulation/mod.rs

//! Executes `qirs::circuits::Circuit` instances on a statevector backend.
//! This module contains the `Simulator` entry point, the `Backend`
//! capability trait, and the internal `SimulationEngine` that evolves the
//! joint state.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface types
pub use results::{MeasurementCounts, ShotResult};

// Import necessary types for the Simulator struct and its methods
use crate::circuits::Circuit;
use crate::core::QirsError;
use crate::operations::Operation;
use crate::validation;
use engine::SimulationEngine;

/// Capability interface over circuit execution: build nothing, own
/// nothing, just turn a circuit and a shot count into an outcome
/// histogram.
///
/// The library's default implementation is `Simulator`; tests (or
/// alternative backends) substitute their own, which is how the histogram
/// consumers stay independent of the concrete simulation strategy.
pub trait Backend {
    /// Executes `circuit` for `shots` repetitions and returns the
    /// frequency histogram over measured bitstrings.
    fn execute(&self, circuit: &Circuit, shots: u64) -> Result<MeasurementCounts, QirsError>;
}

/// The statevector simulator.
///
/// Stateless between calls: every execution builds a fresh engine, so no
/// state crosses from one run to the next. Measurement sampling is
/// unseeded; distinct runs of the same circuit may, and generally do,
/// yield different outcomes.
#[derive(Default)] // Allows Simulator::default() -> Simulator::new()
pub struct Simulator {}

impl Simulator {
    /// Creates a new Simulator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a single shot of the provided circuit.
    ///
    /// Executes the sequence of operations defined in the `circuit`,
    /// evolving the joint state from |0...0>, and resolves measurements
    /// when an `Operation::Measure` is reached.
    ///
    /// # Returns
    /// * `Ok(ShotResult)` containing the measured bit of every measured qubit.
    /// * `Err(QirsError)` if execution fails (unknown qubit, invalid
    ///   entangling gate, backend breakage); failures propagate, there is
    ///   no retry.
    pub fn run(&self, circuit: &Circuit) -> Result<ShotResult, QirsError> {
        // Handle empty circuit case
        if circuit.is_empty() {
            return Ok(ShotResult::new());
        }

        // 1. Initialize the engine with all unique qubits involved in the
        // circuit; initial state |0...0>.
        let mut engine = SimulationEngine::init(circuit.qubits())?;

        // 2. Initialize the results container for measured bits.
        let mut result = ShotResult::new();

        // 3. Iterate through the ordered sequence of operations.
        for op in circuit.operations() {
            match op {
                // Handle measurement specifically
                Operation::Measure { targets } => {
                    engine.measure(targets, &mut result)?;
                }
                // For all other operations, evolve the joint state.
                _ => {
                    engine.apply_operation(op)?;
                }
            }
        }

        Ok(result)
    }

    /// Executes the circuit for `shots` full repetitions and tallies the
    /// observed bitstrings.
    ///
    /// A shot is one complete execution of the circuit followed by its
    /// measurement, so each repetition starts from a fresh |0...0> state.
    /// The returned counts sum exactly to `shots`; this is re-checked
    /// before returning and a violation surfaces as `ExecutionError`.
    /// Blocks the calling thread until all shots complete.
    pub fn sample(&self, circuit: &Circuit, shots: u64) -> Result<MeasurementCounts, QirsError> {
        let mut counts = MeasurementCounts::new();
        for _ in 0..shots {
            let shot = self.run(circuit)?;
            counts.record(shot.bitstring());
        }
        validation::check_counts(&counts, shots, None)?;
        Ok(counts)
    }
}

impl Backend for Simulator {
    fn execute(&self, circuit: &Circuit, shots: u64) -> Result<MeasurementCounts, QirsError> {
        self.sample(circuit, shots)
    }
}

#[cfg(test)]
mod tests {
    // Import items from the parent module (simulation) and the crate root
    use super::*;
    use super::engine::SimulationEngine;
    use crate::circuits::{CircuitBuilder, entangler_circuit};
    use crate::core::*;
    use num_complex::Complex;
    use num_traits::Zero;
    use std::collections::HashSet;
    use std::f64::consts::FRAC_1_SQRT_2;

    const TEST_TOLERANCE: f64 = 1e-9;

    // --- Helper Functions ---
    fn qid(id: u64) -> QubitId {
        QubitId(id)
    }

    /// Asserts that two complex state vectors are approximately equal
    /// component-wise.
    fn assert_complex_vec_approx_equal(
        actual: &[Complex<f64>],
        expected: &[Complex<f64>],
        tolerance: f64,
        context: &str,
    ) {
        assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
        for i in 0..actual.len() {
            let diff = actual[i] - expected[i];
            let dist_sq = diff.norm_sqr();
            assert!(
                dist_sq < tolerance * tolerance,
                "Vector mismatch at index {} - Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
                i, actual[i], expected[i], dist_sq, context
            );
        }
    }

    #[test]
    fn test_superpose_creates_equal_amplitudes() -> Result<(), QirsError> {
        let q0 = qid(0);
        let qubit_set: HashSet<QubitId> = [q0].iter().cloned().collect();
        let mut engine = SimulationEngine::init(&qubit_set)?;

        engine.apply_operation(&Operation::Superpose { target: q0 })?;

        let expected = vec![
            Complex::new(FRAC_1_SQRT_2, 0.0),
            Complex::new(FRAC_1_SQRT_2, 0.0),
        ];
        assert_complex_vec_approx_equal(
            engine.get_state().vector(),
            &expected,
            TEST_TOLERANCE,
            "Hadamard on |0>",
        );
        Ok(())
    }

    #[test]
    fn test_double_superpose_is_identity() -> Result<(), QirsError> {
        let q0 = qid(0);
        let qubit_set: HashSet<QubitId> = [q0].iter().cloned().collect();
        let mut engine = SimulationEngine::init(&qubit_set)?;

        engine.apply_operation(&Operation::Superpose { target: q0 })?;
        engine.apply_operation(&Operation::Superpose { target: q0 })?;

        let expected = vec![Complex::new(1.0, 0.0), Complex::zero()];
        assert_complex_vec_approx_equal(
            engine.get_state().vector(),
            &expected,
            TEST_TOLERANCE,
            "H applied twice returns to |0>",
        );
        Ok(())
    }

    #[test]
    fn test_entangle_on_plus_zero_gives_bell_state() -> Result<(), QirsError> {
        // H on the control only, then CNOT: the textbook Bell pair
        // (1/sqrt(2))(|00> + |11>).
        let q0 = qid(0);
        let q1 = qid(1);
        let qubit_set: HashSet<QubitId> = [q0, q1].iter().cloned().collect();
        let mut engine = SimulationEngine::init(&qubit_set)?;

        engine.apply_operation(&Operation::Superpose { target: q0 })?;
        engine.apply_operation(&Operation::Entangle { control: q0, target: q1 })?;

        let sqrt2_inv = Complex::new(FRAC_1_SQRT_2, 0.0);
        let expected = vec![
            sqrt2_inv,       // |00>
            Complex::zero(), // |01>
            Complex::zero(), // |10>
            sqrt2_inv,       // |11>
        ];
        assert_complex_vec_approx_equal(
            engine.get_state().vector(),
            &expected,
            TEST_TOLERANCE,
            "Bell pair from H(q0) + CNOT(q0, q1)",
        );
        Ok(())
    }

    #[test]
    fn test_entangle_direction_matters() -> Result<(), QirsError> {
        // Prepare |10> and apply CNOT(q1, q0): control q1 is 0, so nothing
        // flips. The reversed direction would flip q1.
        let q0 = qid(0);
        let q1 = qid(1);
        let qubit_set: HashSet<QubitId> = [q0, q1].iter().cloned().collect();
        let mut engine = SimulationEngine::init(&qubit_set)?;
        engine.set_state(StateVector::new(vec![
            Complex::zero(),
            Complex::zero(),
            Complex::new(1.0, 0.0), // |10>
            Complex::zero(),
        ]))?;

        engine.apply_operation(&Operation::Entangle { control: q1, target: q0 })?;

        let expected = vec![
            Complex::zero(),
            Complex::zero(),
            Complex::new(1.0, 0.0),
            Complex::zero(),
        ];
        assert_complex_vec_approx_equal(
            engine.get_state().vector(),
            &expected,
            TEST_TOLERANCE,
            "CNOT with unset control leaves |10> unchanged",
        );
        Ok(())
    }

    #[test]
    fn test_measure_basis_state_is_deterministic() -> Result<(), QirsError> {
        // Measuring a basis state always yields that state, unseeded RNG or
        // not.
        let q0 = qid(0);
        let q1 = qid(1);
        let qubit_set: HashSet<QubitId> = [q0, q1].iter().cloned().collect();
        let mut engine = SimulationEngine::init(&qubit_set)?;
        engine.set_state(StateVector::new(vec![
            Complex::zero(),
            Complex::new(1.0, 0.0), // |01>
            Complex::zero(),
            Complex::zero(),
        ]))?;

        let mut result = ShotResult::new();
        engine.measure(&[q0, q1], &mut result)?;

        assert_eq!(result.get_outcome(&q0), Some(0));
        assert_eq!(result.get_outcome(&q1), Some(1));
        assert_eq!(result.bitstring(), "01");
        Ok(())
    }

    #[test]
    fn test_measure_collapses_state() -> Result<(), QirsError> {
        let q0 = qid(0);
        let qubit_set: HashSet<QubitId> = [q0].iter().cloned().collect();
        let mut engine = SimulationEngine::init(&qubit_set)?;
        engine.apply_operation(&Operation::Superpose { target: q0 })?;

        let mut result = ShotResult::new();
        engine.measure(&[q0], &mut result)?;

        // Whatever was sampled, the state is now that basis state exactly.
        let bit = result.get_outcome(&q0).expect("q0 was measured");
        let mut expected = vec![Complex::zero(), Complex::zero()];
        expected[bit as usize] = Complex::new(1.0, 0.0);
        assert_complex_vec_approx_equal(
            engine.get_state().vector(),
            &expected,
            TEST_TOLERANCE,
            "state collapsed to the sampled basis state",
        );
        Ok(())
    }

    #[test]
    fn test_self_entangle_is_rejected() -> Result<(), QirsError> {
        let q0 = qid(0);
        let circuit = CircuitBuilder::new()
            .add_op(Operation::Entangle { control: q0, target: q0 })
            .add_op(Operation::Measure { targets: vec![q0] })
            .build();

        let simulator = Simulator::new();
        match simulator.run(&circuit) {
            Err(QirsError::InvalidOperation { .. }) => Ok(()),
            other => panic!("expected InvalidOperation for self-entangle, got {:?}", other),
        }
    }

    #[test]
    fn test_sample_totals_and_key_widths() -> Result<(), QirsError> {
        let simulator = Simulator::new();
        for num_qubits in MIN_ENTANGLER_QUBITS..=MAX_ENTANGLER_QUBITS {
            let circuit = entangler_circuit(num_qubits)?;
            let counts = simulator.sample(&circuit, 128)?;
            assert_eq!(counts.shots(), 128);
            assert_eq!(counts.counts().values().sum::<u64>(), 128);
            for bits in counts.counts().keys() {
                assert_eq!(bits.len(), num_qubits as usize, "key width for {} qubits", num_qubits);
            }
        }
        Ok(())
    }
}
