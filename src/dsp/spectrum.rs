use num_complex::Complex;
use rustfft::FftPlanner;

use super::DspError;

// ---------------------------------------------------------------------------
// Forward transform
// ---------------------------------------------------------------------------

/// Forward-transform output: the complex bins and their polar decomposition.
///
/// All three sequences are co-indexed with the frequency axis handed to
/// [`transform`], in the transform's own bin order (no re-centering of
/// negative frequencies, no re-sorting).
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Euclidean norm per bin, always ≥ 0.
    pub magnitude: Vec<f64>,
    /// Four-quadrant phase angle per bin, in (−π, π].
    pub phase: Vec<f64>,
    /// Raw complex DFT output.
    pub bins: Vec<Complex<f64>>,
}

/// Compute the unnormalized forward DFT of `samples` and its polar form.
///
/// `frequencies` takes no part in the transform itself, but every sample
/// series must be co-indexed with its frequency axis, so a length
/// disagreement is rejected here before any transform work is done.
pub fn transform(samples: &[f64], frequencies: &[f64]) -> Result<Spectrum, DspError> {
    if samples.len() != frequencies.len() {
        return Err(DspError::LengthMismatch {
            left: samples.len(),
            right: frequencies.len(),
        });
    }

    let mut bins: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();

    if !bins.is_empty() {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(bins.len());
        fft.process(&mut bins);
    }

    let magnitude: Vec<f64> = bins.iter().map(|c| c.norm()).collect();
    let phase: Vec<f64> = bins.iter().map(|c| c.arg()).collect();

    Ok(Spectrum {
        magnitude,
        phase,
        bins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn axis(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 * 1e9).collect()
    }

    #[test]
    fn impulse_has_flat_unit_magnitude() {
        let samples = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let spectrum = transform(&samples, &axis(8)).unwrap();
        for k in 0..8 {
            assert_abs_diff_eq!(spectrum.magnitude[k], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_signal_concentrates_in_dc_bin() {
        let samples = [2.5; 6];
        let spectrum = transform(&samples, &axis(6)).unwrap();
        assert_abs_diff_eq!(spectrum.bins[0].re, 15.0, epsilon = 1e-9);
        assert_abs_diff_eq!(spectrum.bins[0].im, 0.0, epsilon = 1e-9);
        for k in 1..6 {
            assert_abs_diff_eq!(spectrum.magnitude[k], 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn output_lengths_match_input() {
        let samples: Vec<f64> = (0..13).map(|i| (i as f64 * 0.7).sin()).collect();
        let spectrum = transform(&samples, &axis(13)).unwrap();
        assert_eq!(spectrum.magnitude.len(), 13);
        assert_eq!(spectrum.phase.len(), 13);
        assert_eq!(spectrum.bins.len(), 13);
    }

    #[test]
    fn magnitude_non_negative_and_phase_in_range() {
        let samples: Vec<f64> = (0..32)
            .map(|i| (i as f64 * 0.3).cos() - 0.2 * i as f64)
            .collect();
        let spectrum = transform(&samples, &axis(32)).unwrap();
        for (&m, &p) in spectrum.magnitude.iter().zip(&spectrum.phase) {
            assert!(m >= 0.0);
            assert!((-PI..=PI).contains(&p), "phase {p} out of range");
        }
    }

    #[test]
    fn rejects_mismatched_axis() {
        let err = transform(&[1.0, 2.0, 3.0], &axis(2)).unwrap_err();
        assert_eq!(err, DspError::LengthMismatch { left: 3, right: 2 });
    }

    #[test]
    fn single_sample_transform_is_identity() {
        let spectrum = transform(&[4.2], &[0.0]).unwrap();
        assert_abs_diff_eq!(spectrum.bins[0].re, 4.2, epsilon = 1e-12);
        assert_abs_diff_eq!(spectrum.bins[0].im, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spectrum.magnitude[0], 4.2, epsilon = 1e-12);
    }
}
