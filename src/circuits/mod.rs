// src/circuits/mod.rs

//! Structures for representing and building ordered sequences of
//! operations (`qirs::operations::Operation`).
//!
//! This module provides the `Circuit` structure, a builder for assembling
//! one by hand, and `entangler_circuit` for the demo's fixed topology.
//! `Circuit` implements `Display` as an ASCII diagram, which is the crate's
//! circuit-drawing facility.

// Import necessary types from other modules
use crate::core::{MAX_ENTANGLER_QUBITS, MIN_ENTANGLER_QUBITS, QirsError, QubitId};
use crate::operations::Operation;
use std::collections::{HashMap, HashSet}; // HashSet tracks the unique qubits involved
use std::fmt;

/// An ordered sequence of operations applied to a set of qubits.
///
/// The operation order is the execution order; the engine replays it
/// verbatim.
#[derive(Clone, PartialEq)] // PartialEq useful for testing circuits
pub struct Circuit {
    /// The unique set of qubits involved across all operations.
    qubits: HashSet<QubitId>,

    /// The ordered sequence of operations defining the circuit's logic.
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: HashSet::new(),
            operations: Vec::new(),
        }
    }

    /// Adds a single operation to the end of the circuit's sequence,
    /// registering any qubits it mentions.
    pub fn add_operation(&mut self, op: Operation) {
        for qubit_id in op.involved_qubits() {
            self.qubits.insert(qubit_id);
        }
        self.operations.push(op);
    }

    /// Adds multiple operations from an iterator to the end of the sequence.
    pub fn add_operations<I>(&mut self, ops: I)
    where
        I: IntoIterator<Item = Operation>,
    {
        for op in ops {
            self.add_operation(op);
        }
    }

    /// Returns the set of unique qubit ids involved in this circuit.
    pub fn qubits(&self) -> &HashSet<QubitId> {
        &self.qubits
    }

    /// Returns the ordered sequence of operations in this circuit.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Returns the total number of operations defined in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

// Implement Default for convenient creation of empty circuits.
impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for programmatically constructing `Circuit` instances
/// using method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
        }
    }

    /// Adds a single operation to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_op(mut self, op: Operation) -> Self {
        self.circuit.add_operation(op);
        self
    }

    /// Adds multiple operations from an iterator to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_ops<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = Operation>,
    {
        self.circuit.add_operations(ops);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// Implement Default for convenient creation of builders.
impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the demo's fixed entangler topology over `num_qubits` qubits:
/// a superposition gate on every qubit in index order, a chain of
/// entangling gates `control i -> target i + 1` for ascending `i`, and a
/// single measurement of all qubits.
///
/// `num_qubits` must lie in `[MIN_ENTANGLER_QUBITS, MAX_ENTANGLER_QUBITS]`
/// (the slider range of the interactive demo); anything else is
/// `QirsError::InvalidParameter`.
pub fn entangler_circuit(num_qubits: u64) -> Result<Circuit, QirsError> {
    if !(MIN_ENTANGLER_QUBITS..=MAX_ENTANGLER_QUBITS).contains(&num_qubits) {
        return Err(QirsError::InvalidParameter {
            message: format!(
                "qubit count must lie in [{}, {}], got {}",
                MIN_ENTANGLER_QUBITS, MAX_ENTANGLER_QUBITS, num_qubits
            ),
        });
    }

    let mut builder = CircuitBuilder::new();
    for i in 0..num_qubits {
        builder = builder.add_op(Operation::Superpose { target: QubitId(i) });
    }
    for i in 0..num_qubits - 1 {
        builder = builder.add_op(Operation::Entangle {
            control: QubitId(i),
            target: QubitId(i + 1),
        });
    }
    let targets = (0..num_qubits).map(QubitId).collect();
    Ok(builder.add_op(Operation::Measure { targets }).build())
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Column width of one time step, e.g. "───H───".
        const STEP_WIDTH: usize = 7;

        /// Centers a gate symbol on its wire segment.
        fn wire_cell(symbol: Option<&str>) -> String {
            match symbol {
                None => "─".repeat(STEP_WIDTH),
                Some(s) => {
                    let pad = STEP_WIDTH.saturating_sub(s.chars().count());
                    format!("{}{}{}", "─".repeat(pad / 2), s, "─".repeat(pad - pad / 2))
                }
            }
        }

        /// Centers a connector char in an otherwise blank column.
        fn gap_cell(connector: char) -> String {
            let pad = STEP_WIDTH - 1;
            format!("{}{}{}", " ".repeat(pad / 2), connector, " ".repeat(pad - pad / 2))
        }

        if self.operations.is_empty() {
            return writeln!(f, "qirs::Circuit[0 operations on 0 qubits]");
        }

        // Rows are qubits in numeric order; columns are time steps.
        let mut rows: Vec<QubitId> = self.qubits.iter().cloned().collect();
        rows.sort();
        let row_of: HashMap<QubitId, usize> =
            rows.iter().enumerate().map(|(r, qid)| (*qid, r)).collect();
        let label_width = rows.iter().map(|qid| qid.to_string().len()).max().unwrap_or(0) + 2;

        // wires[r] collects the gate cells of qubit r; gaps[r] the connector
        // cells drawn between rows r and r + 1.
        let mut wires = vec![Vec::new(); rows.len()];
        let mut gaps = vec![Vec::new(); rows.len().saturating_sub(1)];

        for op in &self.operations {
            let mut symbols: HashMap<usize, &str> = HashMap::new();
            let mut spanned_gaps: Vec<usize> = Vec::new();
            match op {
                Operation::Superpose { target } => {
                    symbols.insert(row_of[target], "H");
                }
                Operation::Entangle { control, target } => {
                    let (r_ctrl, r_tgt) = (row_of[control], row_of[target]);
                    symbols.insert(r_ctrl, "@");
                    symbols.insert(r_tgt, "X");
                    spanned_gaps.extend(r_ctrl.min(r_tgt)..r_ctrl.max(r_tgt));
                }
                Operation::Measure { targets } => {
                    for target_qid in targets {
                        symbols.insert(row_of[target_qid], "M");
                    }
                }
            }
            for (r, wire) in wires.iter_mut().enumerate() {
                wire.push(wire_cell(symbols.get(&r).copied()));
            }
            for (g, gap) in gaps.iter_mut().enumerate() {
                gap.push(gap_cell(if spanned_gaps.contains(&g) { '│' } else { ' ' }));
            }
        }

        writeln!(f, "qirs::Circuit[{} operations on {} qubits]", self.operations.len(), rows.len())?;
        for (r, qid) in rows.iter().enumerate() {
            let label = format!("{}: ", qid);
            writeln!(f, "{:<label_width$}{}", label, wires[r].concat())?;
            if r < gaps.len() {
                writeln!(f, "{:<label_width$}{}", "", gaps[r].concat())?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
