//! Quantum-inspired section of the virtual lab: build the fixed entangler
//! topology, print its diagram, and sample the measurement histogram.

use qirs::{entangler_circuit, QirsError, Simulator, SHOTS};

fn main() -> Result<(), QirsError> {
    println!("## Quantum-Inspired RS Encoding\n");
    println!("Superposition stands in for parallel evaluation, entangling gates");
    println!("for symbol correlation, measurement for the encoded output.");
    println!("This is a quantum-inspired simulation, not a true quantum RS code.\n");

    let num_qubits = 3; // demo default slider position
    let circuit = entangler_circuit(num_qubits)?;

    println!("Quantum circuit ({} qubits):", num_qubits);
    println!("{}", circuit);

    let simulator = Simulator::new();

    // One shot first, to show what a single execution resolves to.
    let shot = simulator.run(&circuit)?;
    println!("{}", shot);
    println!("Bitstring: {}\n", shot.bitstring());

    println!("Sampling {} shots...\n", SHOTS);
    let counts = simulator.sample(&circuit, SHOTS)?;

    println!("Measurement output (quantum-inspired codeword):");
    println!("{}", counts);

    Ok(())
}
