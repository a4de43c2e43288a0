//! Benchmark build catalog.
//!
//! Build labels are opaque dated revisions of the benchmark software.
//! The catalog is the total order: newest first, oldest last.

/// Built-in build labels, newest first.
pub static BUILDS: &[&str] = &["2025.48", "2025.46", "2025.44", "2025.42", "2025.40"];

#[cfg(test)]
mod tests {
    use super::BUILDS;
    use crate::synth::build_number;

    #[test]
    fn labels_are_newest_first() {
        let numbers: Vec<u32> = BUILDS
            .iter()
            .map(|b| build_number(b).expect("Expected numeric build label"))
            .collect();
        assert!(numbers.windows(2).all(|w| w[0] > w[1]), "{numbers:?}");
    }
}
