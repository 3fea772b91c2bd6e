//! Low-pass masking of a polar spectrum.
//!
//! Removal is one-sided: only bins whose axis frequency exceeds the cutoff
//! are dropped, and the removal is not mirrored onto the conjugate
//! high-index bins that a real-input transform also populates. The filtered
//! spectrum can therefore lose conjugate symmetry, which leaks an imaginary
//! residual into the inverse transform; reconstruction discards it when it
//! takes the real part. Known caveat, kept until the intended physical
//! semantics (symmetric band vs. one-sided magnitude-domain filter) is
//! settled.

use super::DspError;

/// The surviving (magnitude, phase, frequency) triple after low-pass masking.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub magnitude: Vec<f64>,
    pub phase: Vec<f64>,
    pub frequency: Vec<f64>,
}

impl Band {
    /// Number of surviving bins.
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }
}

/// Drop every index whose frequency exceeds `cutoff_hz`.
///
/// Index k survives iff `frequency[k] <= cutoff_hz`; survivors keep their
/// relative order even when the frequency axis is not sorted. An empty
/// result is legal and flows through the rest of the pipeline.
pub fn filter_band(
    magnitude: &[f64],
    phase: &[f64],
    frequency: &[f64],
    cutoff_hz: f64,
) -> Result<Band, DspError> {
    for seq in [magnitude, phase] {
        if seq.len() != frequency.len() {
            return Err(DspError::LengthMismatch {
                left: seq.len(),
                right: frequency.len(),
            });
        }
    }

    let mut band = Band {
        magnitude: Vec::with_capacity(frequency.len()),
        phase: Vec::with_capacity(frequency.len()),
        frequency: Vec::with_capacity(frequency.len()),
    };
    for (k, &f) in frequency.iter().enumerate() {
        if f <= cutoff_hz {
            band.magnitude.push(magnitude[k]);
            band.phase.push(phase[k]);
            band.frequency.push(f);
        }
    }
    Ok(band)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retains_bins_at_or_below_cutoff() {
        let magnitude = [10.0, 20.0, 30.0, 40.0];
        let phase = [0.1, 0.2, 0.3, 0.4];
        let frequency = [1e9, 1e10, 1.2e10, 1.3e10];

        let band = filter_band(&magnitude, &phase, &frequency, 1.15e10).unwrap();

        assert_eq!(band.frequency, vec![1e9, 1e10]);
        assert_eq!(band.magnitude, vec![10.0, 20.0]);
        assert_eq!(band.phase, vec![0.1, 0.2]);
    }

    #[test]
    fn cutoff_boundary_is_inclusive() {
        let band = filter_band(&[1.0, 2.0], &[0.0, 0.0], &[1.0e10, 1.15e10], 1.15e10).unwrap();
        assert_eq!(band.len(), 2);
    }

    #[test]
    fn cutoff_below_all_frequencies_empties_the_band() {
        let band = filter_band(&[1.0, 2.0, 3.0], &[0.1, 0.2, 0.3], &[1e9, 2e9, 3e9], 5e8).unwrap();
        assert!(band.is_empty());
        assert!(band.magnitude.is_empty());
        assert!(band.phase.is_empty());
    }

    #[test]
    fn survivors_keep_relative_order_for_unsorted_axis() {
        let magnitude = [1.0, 2.0, 3.0, 4.0, 5.0];
        let phase = [0.5, 0.4, 0.3, 0.2, 0.1];
        let frequency = [3e9, 9e9, 1e9, 8e9, 2e9];

        let band = filter_band(&magnitude, &phase, &frequency, 4e9).unwrap();

        assert_eq!(band.frequency, vec![3e9, 1e9, 2e9]);
        assert_eq!(band.magnitude, vec![1.0, 3.0, 5.0]);
        assert_eq!(band.phase, vec![0.5, 0.3, 0.1]);
    }

    #[test]
    fn output_sequences_share_one_length() {
        let magnitude: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let phase = vec![0.0; 10];
        let frequency: Vec<f64> = (0..10).map(|i| i as f64 * 1e9).collect();

        let band = filter_band(&magnitude, &phase, &frequency, 4.5e9).unwrap();

        assert_eq!(band.len(), 5);
        assert_eq!(band.magnitude.len(), band.phase.len());
        assert_eq!(band.phase.len(), band.frequency.len());
    }

    #[test]
    fn rejects_mismatched_inputs() {
        let err = filter_band(&[1.0, 2.0], &[0.0, 0.0, 0.0], &[1e9, 2e9, 3e9], 1e10).unwrap_err();
        assert_eq!(err, DspError::LengthMismatch { left: 2, right: 3 });
    }
}
