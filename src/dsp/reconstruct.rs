use num_complex::Complex;
use rustfft::FftPlanner;

use super::DspError;

// ---------------------------------------------------------------------------
// Inverse transform
// ---------------------------------------------------------------------------

/// Rebuild a complex spectrum from its polar form and inverse-transform it
/// back to a real signal.
///
/// Bin k is restored as `magnitude[k] · exp(i · phase[k])`, the exact
/// inverse of the polar decomposition performed by
/// [`spectrum::transform`](super::spectrum::transform). rustfft leaves its
/// inverse unscaled, so the output is normalized by 1/M before the real
/// parts are taken; the imaginary residual is discarded.
pub fn reconstruct(magnitude: &[f64], phase: &[f64]) -> Result<Vec<f64>, DspError> {
    if magnitude.len() != phase.len() {
        return Err(DspError::LengthMismatch {
            left: magnitude.len(),
            right: phase.len(),
        });
    }
    if magnitude.is_empty() {
        return Ok(Vec::new());
    }

    let mut bins: Vec<Complex<f64>> = magnitude
        .iter()
        .zip(phase)
        .map(|(&m, &p)| Complex::from_polar(m, p))
        .collect();

    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(bins.len());
    ifft.process(&mut bins);

    let scale = 1.0 / bins.len() as f64;
    Ok(bins.iter().map(|c| c.re * scale).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::band::filter_band;
    use crate::dsp::spectrum::transform;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unfiltered_round_trip_recovers_the_input() {
        let samples: Vec<f64> = (0..17).map(|i| (i as f64 * 0.9).sin() + 0.3).collect();
        let frequency: Vec<f64> = (0..17).map(|i| i as f64 * 1e9).collect();

        let spectrum = transform(&samples, &frequency).unwrap();
        // Cutoff above the whole axis keeps every bin.
        let band = filter_band(&spectrum.magnitude, &spectrum.phase, &frequency, 1e12).unwrap();
        assert_eq!(band.len(), samples.len());

        let recovered = reconstruct(&band.magnitude, &band.phase).unwrap();
        assert_eq!(recovered.len(), samples.len());
        for (&r, &s) in recovered.iter().zip(&samples) {
            assert_abs_diff_eq!(r, s, epsilon = 1e-9);
        }
    }

    #[test]
    fn round_trip_holds_for_a_single_sample() {
        let spectrum = transform(&[-7.25], &[0.0]).unwrap();
        let recovered = reconstruct(&spectrum.magnitude, &spectrum.phase).unwrap();
        assert_eq!(recovered.len(), 1);
        assert_abs_diff_eq!(recovered[0], -7.25, epsilon = 1e-12);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let recovered = reconstruct(&[], &[]).unwrap();
        assert!(recovered.is_empty());
    }

    #[test]
    fn rejects_mismatched_polar_pair() {
        let err = reconstruct(&[1.0, 2.0], &[0.0]).unwrap_err();
        assert_eq!(err, DspError::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn output_length_matches_band_length() {
        let magnitude = vec![1.0; 5];
        let phase = vec![0.0; 5];
        let recovered = reconstruct(&magnitude, &phase).unwrap();
        assert_eq!(recovered.len(), 5);
    }

    #[test]
    fn filtered_reconstruction_differs_from_the_naive_inverse() {
        let samples = [1.0, 0.0, -1.0, 0.0];
        let frequency = [0.0, 1e9, 2e9, 3e9];

        let spectrum = transform(&samples, &frequency).unwrap();
        let band = filter_band(&spectrum.magnitude, &spectrum.phase, &frequency, 2.5e9).unwrap();

        // Only the 3 GHz bin is dropped.
        assert_eq!(band.frequency, vec![0.0, 1e9, 2e9]);

        let filtered = reconstruct(&band.magnitude, &band.phase).unwrap();
        assert_eq!(filtered.len(), 3);

        // DFT of [1, 0, -1, 0] is [0, 2, 0, 2]; keeping [0, 2, 0] and
        // inverting over M = 3 gives (2/3)·cos(2πn/3).
        assert_abs_diff_eq!(filtered[0], 2.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(filtered[1], -1.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(filtered[2], -1.0 / 3.0, epsilon = 1e-9);

        // The unfiltered inverse reproduces the original samples, so the
        // filter demonstrably changed the outcome.
        let unfiltered = reconstruct(&spectrum.magnitude, &spectrum.phase).unwrap();
        assert_abs_diff_eq!(unfiltered[0], 1.0, epsilon = 1e-9);
        assert!((filtered[0] - unfiltered[0]).abs() > 0.1);
    }
}
