// src/simulation/engine.rs
use crate::core::{QirsError, QubitId, StateVector};
use crate::operations::Operation;
// NOTE: Does not directly use Circuit, operates on ops passed from Simulator
use crate::simulation::ShotResult;
use crate::validation;
use num_complex::Complex;
use num_traits::Zero; // For Complex::zero()
use rand::RngExt;
use std::collections::{HashMap, HashSet};
use std::f64::consts::FRAC_1_SQRT_2;

/// The statevector engine behind `Simulator`.
///
/// Holds the joint state of all qubits in a circuit as a dense vector of
/// `2^N` complex amplitudes and evolves it gate by gate. (Internal
/// visibility)
pub(crate) struct SimulationEngine {
    /// Maps qubit ids to their index (0..N-1) in the ordered list used for
    /// the joint state vector.
    qubit_indices: HashMap<QubitId, usize>,
    /// The joint state vector; dimension 2^N for N qubits. The qubit with
    /// the smallest id occupies the most significant bit of each basis
    /// index, so bitstrings read left to right in qubit order.
    state: StateVector,
    /// Number of qubits being simulated (N).
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine for a given set of qubits, in the all-zeros
    /// basis state |0...0>.
    pub(crate) fn init(qubit_ids: &HashSet<QubitId>) -> Result<Self, QirsError> {
        if qubit_ids.is_empty() {
            return Err(QirsError::InvalidOperation {
                message: "cannot initialize simulation engine with zero qubits".to_string(),
            });
        }

        let num_qubits = qubit_ids.len();
        let dim = 1usize.checked_shl(num_qubits as u32).ok_or_else(|| QirsError::ExecutionError {
            message: "qubit count too large, state vector dimension overflows usize".to_string(),
        })?;

        // Create mapping from QubitId to index (0..N-1).
        // Sort ids to ensure deterministic index assignment regardless of
        // HashSet iteration order.
        let mut qubit_indices = HashMap::with_capacity(num_qubits);
        let mut sorted_ids: Vec<QubitId> = qubit_ids.iter().cloned().collect();
        sorted_ids.sort();
        for (index, qubit_id) in sorted_ids.into_iter().enumerate() {
            qubit_indices.insert(qubit_id, index);
        }

        // |0...0> : amplitude 1.0 at index 0, rest 0.0
        let mut initial_vec = vec![Complex::zero(); dim];
        initial_vec[0] = Complex::new(1.0, 0.0);
        let state = StateVector::new(initial_vec);

        Ok(Self {
            qubit_indices,
            state,
            num_qubits,
        })
    }

    // Crate-visible state accessors for tests
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), QirsError> {
        if state.dim() != self.state.dim() {
            Err(QirsError::ExecutionError {
                message: format!(
                    "cannot set state: provided dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            })
        } else {
            self.state = state;
            Ok(())
        }
    }

    #[cfg(test)]
    pub(crate) fn get_state(&self) -> &StateVector {
        &self.state
    }

    /// Applies a single non-measurement operation to the joint state.
    pub(crate) fn apply_operation(&mut self, op: &Operation) -> Result<(), QirsError> {
        match op {
            Operation::Superpose { target } => {
                let target_idx = self.get_qubit_index(target)?;
                self.apply_single_qubit_gate(target_idx, &superposition_matrix());
            }
            Operation::Entangle { control, target } => {
                let control_idx = self.get_qubit_index(control)?;
                let target_idx = self.get_qubit_index(target)?;

                if control_idx == target_idx {
                    return Err(QirsError::InvalidOperation {
                        message: "control and target qubits cannot be the same for an entangling gate".to_string(),
                    });
                }

                // Controlled-NOT: flip the target exactly when the control
                // bit is 1. Basis order: |control, target> -> |00>, |01>,
                // |10>, |11>.
                let one = Complex::new(1.0, 0.0);
                let controlled_not_matrix: [[Complex<f64>; 4]; 4] = [
                    // Control |0> subspace: identity on target
                    [one, Complex::zero(), Complex::zero(), Complex::zero()],
                    [Complex::zero(), one, Complex::zero(), Complex::zero()],
                    // Control |1> subspace: flip target
                    [Complex::zero(), Complex::zero(), Complex::zero(), one],
                    [Complex::zero(), Complex::zero(), one, Complex::zero()],
                ];

                self.apply_two_qubit_gate(control_idx, target_idx, &controlled_not_matrix);
            }
            Operation::Measure { .. } => {
                return Err(QirsError::InvalidOperation {
                    message: "Measure operation should not be passed directly to apply_operation".to_string(),
                });
            }
        };
        Ok(())
    }

    /// Measures the targeted qubits simultaneously, sampling one basis
    /// state from the Born distribution |c_k|^2.
    ///
    /// The random draw is deliberately unseeded (thread-local entropy), so
    /// repeated executions of the same circuit produce varying outcomes,
    /// which is what the shot histogram displays. The joint state collapses
    /// to the sampled basis state and the targeted qubits' bits are
    /// recorded.
    pub(crate) fn measure(&mut self, targets: &[QubitId], result: &mut ShotResult) -> Result<(), QirsError> {
        if targets.is_empty() {
            return Ok(()); // Nothing to measure
        }

        // Gates are unitary, so a failed check here means engine breakage
        // rather than user error; surface it as an execution failure.
        validation::check_normalization(&self.state, None)?;

        let dim = self.state.dim();
        let state_vector = self.state.vector();

        // Collect the outcomes with non-negligible probability |c_k|^2.
        let mut possible_outcomes: Vec<(usize, f64)> = Vec::with_capacity(dim);
        let mut total_probability = 0.0;
        for (k, amplitude) in state_vector.iter().enumerate() {
            let probability = amplitude.norm_sqr();
            if probability > 1e-12 {
                possible_outcomes.push((k, probability));
                total_probability += probability;
            }
        }
        if possible_outcomes.is_empty() {
            // Unreachable after the normalization check, kept as a guard.
            return Err(QirsError::ExecutionError {
                message: "measurement failed: no outcome has non-negligible probability".to_string(),
            });
        }

        // Sample one outcome index k from the Born distribution.
        let mut rng = rand::rng();
        let p_sample: f64 = rng.random::<f64>() * total_probability; // sample in [0, total)
        let mut cumulative = 0.0;
        let mut chosen_outcome_index = possible_outcomes.last().map(|(k, _)| *k).unwrap_or(0);
        for (k, probability) in &possible_outcomes {
            cumulative += *probability;
            if p_sample < cumulative {
                chosen_outcome_index = *k;
                break;
            }
        }

        // Collapse the joint state to the chosen basis state |k>.
        let mut new_state_vec = vec![Complex::zero(); dim];
        new_state_vec[chosen_outcome_index] = Complex::new(1.0, 0.0);
        self.state = StateVector::new(new_state_vec);

        // Record bits for the targeted qubits.
        for target_qubit_id in targets {
            if let Some(target_idx) = self.qubit_indices.get(target_qubit_id) {
                let bit_pos = self.num_qubits - 1 - *target_idx;
                let outcome_bit = (chosen_outcome_index >> bit_pos) & 1;
                result.record_outcome(*target_qubit_id, outcome_bit as u8);
            } else {
                return Err(QirsError::ExecutionError {
                    message: format!("qubit {} targeted for measurement not found in simulation context", target_qubit_id),
                });
            }
        }

        Ok(())
    }

    /// Helper to get a qubit's index, returning a specific error if not found.
    fn get_qubit_index(&self, qubit_id: &QubitId) -> Result<usize, QirsError> {
        self.qubit_indices.get(qubit_id).copied().ok_or_else(|| QirsError::ExecutionError {
            message: format!("qubit {} not found in simulation context", qubit_id),
        })
    }

    /// Applies a 2x2 matrix operation targeting a single qubit within the
    /// joint state vector. Standard tensor-product structure: iterate over
    /// the basis-state pairs that differ only in the target qubit's bit.
    fn apply_single_qubit_gate(&mut self, target_idx: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let bit_pos = self.num_qubits - 1 - target_idx;
        let mask = 1usize << bit_pos;

        let dim = self.state.dim();
        let mut new_vec = vec![Complex::zero(); dim];

        for i0 in 0..dim {
            if i0 & mask != 0 {
                continue; // visit each pair once, from its |...0...> member
            }
            let i1 = i0 | mask;

            let psi_0 = self.state.vector()[i0]; // amplitude for |...target=0...>
            let psi_1 = self.state.vector()[i1]; // amplitude for |...target=1...>

            // Apply the 2x2 matrix: [psi_0', psi_1'] = matrix * [psi_0, psi_1]
            new_vec[i0] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            new_vec[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }

        self.state = StateVector::new(new_vec);
    }

    /// Applies a 4x4 matrix operation targeting two specific qubits within
    /// the joint state vector.
    ///
    /// Matrix rows/cols follow the |idx1_bit, idx2_bit> basis order
    /// |00>, |01>, |10>, |11>, with idx1 supplying the high bit.
    fn apply_two_qubit_gate(
        &mut self,
        idx1: usize,
        idx2: usize,
        matrix: &[[Complex<f64>; 4]; 4],
    ) {
        let mask1 = 1usize << (self.num_qubits - 1 - idx1);
        let mask2 = 1usize << (self.num_qubits - 1 - idx2);

        let dim = self.state.dim();
        let mut new_vec = vec![Complex::zero(); dim];

        for i_base in 0..dim {
            if i_base & mask1 != 0 || i_base & mask2 != 0 {
                continue; // visit each 4-state subspace once, from its |..00..> member
            }

            // The four basis indices of the subspace, in matrix basis order.
            let indices = [i_base, i_base | mask2, i_base | mask1, i_base | mask1 | mask2];

            let mut psi = [Complex::zero(); 4];
            for (j, &idx) in indices.iter().enumerate() {
                psi[j] = self.state.vector()[idx];
            }

            // Apply the 4x4 matrix: psi' = matrix * psi
            for (row, &idx) in indices.iter().enumerate() {
                let mut acc = Complex::zero();
                for (col, &amp) in psi.iter().enumerate() {
                    acc += matrix[row][col] * amp;
                }
                new_vec[idx] = acc;
            }
        }

        self.state = StateVector::new(new_vec);
    }
}

/// The 2x2 Hadamard matrix behind `Operation::Superpose`: maps each basis
/// state to an equal-weight superposition.
fn superposition_matrix() -> [[Complex<f64>; 2]; 2] {
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}
