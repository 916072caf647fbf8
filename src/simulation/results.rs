// src/simulation/results.rs
use crate::core::QubitId;
use std::collections::HashMap;
use std::fmt;

/// The resolved bits of a single circuit execution (one shot).
/// Contains the measured bit for every qubit that underwent measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotResult {
    /// Maps measured qubit ids to their resolved bit.
    outcomes: HashMap<QubitId, u8>,
}

impl ShotResult {
    /// Creates a new, empty result set. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
        }
    }

    /// Records a measured bit for a qubit. (Internal visibility)
    pub(crate) fn record_outcome(&mut self, qubit_id: QubitId, bit: u8) {
        self.outcomes.insert(qubit_id, bit);
    }

    /// Gets the measured bit for a specific qubit, if it was measured.
    pub fn get_outcome(&self, qubit_id: &QubitId) -> Option<u8> {
        self.outcomes.get(qubit_id).copied()
    }

    /// Returns the map of all measured qubits and their bits.
    pub fn all_outcomes(&self) -> &HashMap<QubitId, u8> {
        &self.outcomes
    }

    /// Renders the shot as a bitstring, one character per measured qubit,
    /// smallest qubit id leftmost. Length equals the number of measured
    /// qubits.
    pub fn bitstring(&self) -> String {
        let mut sorted: Vec<_> = self.outcomes.iter().collect();
        sorted.sort_by_key(|(id, _)| *id);
        sorted
            .into_iter()
            .map(|(_, bit)| if *bit == 0 { '0' } else { '1' })
            .collect()
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shot Result:")?;
        if self.outcomes.is_empty() {
            writeln!(f, "  No qubits were measured.")?;
        } else {
            // Sort by qubit id for consistent and readable output
            let mut sorted_outcomes: Vec<_> = self.outcomes.iter().collect();
            sorted_outcomes.sort_by_key(|(id, _)| *id);
            writeln!(f, "  Measured bits:")?;
            for (id, bit) in sorted_outcomes {
                writeln!(f, "    {}: {}", id, bit)?;
            }
        }
        Ok(())
    }
}

/// A frequency histogram over measured bitstrings, accumulated across
/// repeated executions of one circuit.
///
/// Counts always sum to the number of shots taken, and every key has one
/// character per measured qubit. The `Display` impl renders the ASCII
/// histogram the demo shows in place of a plotted chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementCounts {
    counts: HashMap<String, u64>,
    shots: u64,
}

impl MeasurementCounts {
    /// Creates an empty histogram. (Internal visibility)
    pub(crate) fn new() -> Self {
        Self {
            counts: HashMap::new(),
            shots: 0,
        }
    }

    /// Records one observed bitstring. (Internal visibility)
    pub(crate) fn record(&mut self, bitstring: String) {
        *self.counts.entry(bitstring).or_insert(0) += 1;
        self.shots += 1;
    }

    /// Builds a histogram from pre-tallied counts. Total shots are the sum
    /// of the counts. Public so alternative `Backend` implementations
    /// (including deterministic test fakes) can produce results.
    pub fn from_counts(counts: HashMap<String, u64>) -> Self {
        let shots = counts.values().sum();
        Self { counts, shots }
    }

    /// The occurrence count for a bitstring (zero if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Returns the map of all observed bitstrings and their counts.
    pub fn counts(&self) -> &HashMap<String, u64> {
        &self.counts
    }

    /// Total number of shots recorded; equals the sum of all counts.
    pub fn shots(&self) -> u64 {
        self.shots
    }
}

impl fmt::Display for MeasurementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement counts ({} shots):", self.shots)?;
        if self.counts.is_empty() {
            return writeln!(f, "  (no outcomes recorded)");
        }

        // Sort by bitstring for consistent and readable output
        let mut sorted: Vec<_> = self.counts.iter().collect();
        sorted.sort_by_key(|(bits, _)| bits.as_str());

        const BAR_WIDTH: u64 = 40;
        let max_count = sorted.iter().map(|(_, c)| **c).max().unwrap_or(1).max(1);
        for (bits, count) in sorted {
            let bar_len = (count * BAR_WIDTH / max_count) as usize;
            writeln!(f, "  {} | {:<width$} {}", bits, "█".repeat(bar_len), count, width = BAR_WIDTH as usize)?;
        }
        Ok(())
    }
}
