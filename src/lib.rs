// src/lib.rs

//! `qirs` - a quantum-inspired Reed-Solomon encoding teaching toolkit
//!
//! This library reproduces a virtual-lab experiment in three parts: the
//! Singleton-bound distance of an RS(n, k) code, classical codeword
//! generation by polynomial evaluation over plain integers, and a toy
//! "quantum-inspired" entangler circuit sampled on a statevector
//! simulator. None of it is a real error-correcting code; the point is the
//! conceptual bridge, faithfully including its mathematical shortcuts.

pub mod core;
pub mod encoding;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{QirsError, QubitId, StateVector, SHOTS};
pub use encoding::{CodeParameters, Codeword, MessagePolynomial};
pub use operations::Operation;
pub use circuits::{Circuit, CircuitBuilder, entangler_circuit};
pub use simulation::{Backend, MeasurementCounts, ShotResult, Simulator};
pub use validation::{check_counts, check_normalization};

// Example 1: Classical Reed-Solomon walkthrough
// Demonstrates the Singleton bound and the polynomial-evaluation codeword
// for the demo's default inputs.
/// ```
/// use qirs::{CodeParameters, Codeword, MessagePolynomial, QirsError};
///
/// // Singleton bound for the default RS(7, 3) inputs.
/// let params = CodeParameters::new(7, 3)?;
/// assert_eq!(params.minimum_distance(), 5);
///
/// // The default message "3,5,2" as a polynomial m(x) = 3 + 5x + 2x^2,
/// // evaluated at two more points than its degree determines.
/// let message = MessagePolynomial::parse("3,5,2")?;
/// assert_eq!(message.to_string(), "3x^0 + 5x^1 + 2x^2");
///
/// let codeword = Codeword::encode(&message);
/// assert_eq!(codeword.points(), &[1, 2, 3, 4, 5]);
/// assert_eq!(codeword.symbols(), &[10, 21, 36, 55, 78]);
/// # Ok::<(), QirsError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Entangler circuit histogram
// Demonstrates building the fixed-topology circuit and sampling it for the
// standard shot count.
/// ```
/// use qirs::{entangler_circuit, QirsError, Simulator, SHOTS};
///
/// let circuit = entangler_circuit(3)?;
/// println!("{}", circuit); // ASCII circuit diagram
///
/// let simulator = Simulator::new();
/// let counts = simulator.sample(&circuit, SHOTS)?;
///
/// // Counts always sum exactly to the shot total, and every observed
/// // bitstring has one bit per qubit. The split between outcomes varies
/// // run to run because measurement sampling is unseeded.
/// assert_eq!(counts.counts().values().sum::<u64>(), SHOTS);
/// assert!(counts.counts().keys().all(|bits| bits.len() == 3));
/// println!("{}", counts); // ASCII histogram
/// # Ok::<(), QirsError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
