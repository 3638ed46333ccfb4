use crate::error::{Error, Result};
use crate::yin::util::{
    absolute_threshold, cumulative_mean_normalize, difference, parabolic_interpolation,
};

/// The conventional default for the aperiodicity threshold passed to
/// [analyze](Estimator::analyze). Lower values admit fewer, cleaner
/// period candidates.
pub const DEFAULT_THRESHOLD: f32 = 0.15;

/// A YIN fundamental frequency estimator for a fixed frame length.
///
/// The estimator performs no allocations. Intermediate lag values are
/// written to a caller owned scratch slice of half the frame length,
/// so the application stays in control of memory layout, for example
/// when placing buffers in specific memory regions on embedded
/// targets. One instance serves one audio channel; instances share no
/// state with each other.
pub struct Estimator<'a> {
    /// The number of lags in the difference profile, i.e. half the
    /// frame length. Fixed for the lifetime of the estimator.
    half_window_size: usize,
    /// Caller owned intermediate storage, one slot per lag.
    scratch: &'a mut [f32],
    /// The audio sample rate in Hz.
    sample_rate: f32,
    /// See [frequency](Estimator::frequency).
    frequency: f32,
    /// See [probability](Estimator::probability).
    probability: f32,
}

impl<'a> Estimator<'a> {
    /// Creates an estimator for frames of `frame_length` samples,
    /// borrowing `scratch` for intermediate lag values. `scratch` must
    /// hold exactly `frame_length / 2` slots. Its previous contents do
    /// not matter; it is zero filled here and at the start of every
    /// analysis call.
    pub fn new(frame_length: usize, scratch: &'a mut [f32], sample_rate: f32) -> Result<Self> {
        let half_window_size = frame_length / 2;
        // The threshold search starts at lag 2 and needs at least one
        // searchable lag after the fixed prefix.
        if half_window_size < 3 {
            return Err(Error::FrameTooShort(frame_length));
        }
        if scratch.len() != half_window_size {
            return Err(Error::ScratchSizeMismatch {
                expected: half_window_size,
                actual: scratch.len(),
            });
        }
        if sample_rate.is_nan() || sample_rate <= 0.0 {
            return Err(Error::InvalidSampleRate(sample_rate));
        }

        for value in scratch.iter_mut() {
            *value = 0.0;
        }

        Ok(Estimator {
            half_window_size,
            scratch,
            sample_rate,
            frequency: -1.0,
            probability: 0.0,
        })
    }

    /// Analyzes one frame of samples, looking for a fundamental
    /// frequency. The frame must hold exactly twice as many samples as
    /// the estimator's half window size. Any consistent amplitude
    /// scaling works, for example raw 16 bit PCM converted to `f32`.
    ///
    /// On success the outcome is read through
    /// [frequency](Estimator::frequency) and
    /// [probability](Estimator::probability). A frame without a
    /// discernable pitch, for example silence or noise, is a normal
    /// successful outcome reported through the frequency sentinel, not
    /// an error.
    pub fn analyze(&mut self, frame: &[f32], threshold: f32) -> Result<()> {
        if frame.len() != 2 * self.half_window_size {
            return Err(Error::FrameSizeMismatch {
                expected: 2 * self.half_window_size,
                actual: frame.len(),
            });
        }
        if threshold.is_nan() || threshold <= 0.0 || threshold >= 1.0 {
            return Err(Error::InvalidThreshold(threshold));
        }

        for value in self.scratch.iter_mut() {
            *value = 0.0;
        }
        self.frequency = -1.0;
        self.probability = 0.0;

        difference(frame, self.scratch);

        // A frame with no sample variation produces an all zero
        // profile. There is no dip to search for, so report no pitch
        // rather than letting the zero lag values below masquerade as
        // perfect periodicity.
        if self.scratch.iter().all(|value| *value == 0.0) {
            return Ok(());
        }

        cumulative_mean_normalize(self.scratch);

        if let Some(tau) = absolute_threshold(self.scratch, threshold) {
            self.probability = 1.0 - self.scratch[tau];
            self.frequency = self.sample_rate / parabolic_interpolation(self.scratch, tau);
        }

        Ok(())
    }

    /// Returns true if the most recent analysis found a fundamental
    /// frequency.
    pub fn is_valid(&self) -> bool {
        self.frequency > 0.0
    }

    /// Returns the fundamental frequency in Hz found by the most
    /// recent analysis, or `-1.0` if no pitch was found (or no frame
    /// has been analyzed yet).
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Returns the periodicity of the most recent estimate, a value in
    /// (0, 1] where 1 means a perfectly periodic frame. `0.0` if no
    /// pitch was found.
    pub fn probability(&self) -> f32 {
        self.probability
    }

    /// Returns the audio sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Returns the number of lags in the difference profile, i.e. half
    /// the frame length.
    pub fn half_window_size(&self) -> usize {
        self.half_window_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 44100.0;
    const FRAME_LENGTH: usize = 800;

    /// Mixes `amplitude * sin(w t + phase)` into the frame, quantized
    /// to whole 16 bit PCM steps like a real capture path would
    /// deliver. When mixing several components the amplitudes should
    /// sum to at most 1.
    fn mix_sine(frame: &mut [f32], frequency: f32, amplitude: f32, initial_phase: f32) {
        let amp = amplitude * (i16::MAX as f32);
        let dtheta = frequency * 2.0 * core::f32::consts::PI / SAMPLE_RATE;
        let mut theta = initial_phase;
        for sample in frame.iter_mut() {
            *sample += (amp * theta.sin()).round();
            theta += dtheta;
        }
    }

    fn analyze_frame(frame: &[f32]) -> (f32, f32) {
        let mut scratch = [0.0f32; FRAME_LENGTH / 2];
        let mut estimator = Estimator::new(FRAME_LENGTH, &mut scratch, SAMPLE_RATE).unwrap();
        estimator.analyze(frame, DEFAULT_THRESHOLD).unwrap();
        (estimator.frequency(), estimator.probability())
    }

    #[test]
    fn test_pure_tone() {
        let mut frame = [0.0f32; FRAME_LENGTH];
        mix_sine(&mut frame, 220.0, 1.0, 0.0);
        let (frequency, probability) = analyze_frame(&frame);
        assert!((frequency - 220.0).abs() <= 1.0);
        assert!(probability > 0.9);
    }

    #[test]
    fn test_harmonic_mixture() {
        let mut frame = [0.0f32; FRAME_LENGTH];
        mix_sine(&mut frame, 220.0, 0.25, 0.0);
        mix_sine(&mut frame, 440.0, 0.25, 0.0);
        mix_sine(&mut frame, 660.0, 0.25, 0.0);
        let (frequency, probability) = analyze_frame(&frame);
        assert!((frequency - 220.0).abs() <= 1.0);
        assert!(probability > 0.9);
    }

    #[test]
    fn test_harmonic_mixture_with_phase_offsets() {
        let mut frame = [0.0f32; FRAME_LENGTH];
        mix_sine(&mut frame, 220.0, 0.25, core::f32::consts::PI * 0.333);
        mix_sine(&mut frame, 440.0, 0.25, core::f32::consts::PI * 0.667);
        mix_sine(&mut frame, 660.0, 0.25, 0.0);
        let (frequency, probability) = analyze_frame(&frame);
        assert!((frequency - 220.0).abs() <= 1.0);
        assert!(probability > 0.9);
    }

    #[test]
    fn test_missing_fundamental() {
        // Only the second and third harmonics are present. The implied
        // 220 Hz fundamental is still the period of the mixture.
        let mut frame = [0.0f32; FRAME_LENGTH];
        mix_sine(&mut frame, 440.0, 0.25, core::f32::consts::PI * 0.667);
        mix_sine(&mut frame, 660.0, 0.25, 0.0);
        let (frequency, probability) = analyze_frame(&frame);
        assert!((frequency - 220.0).abs() <= 1.0);
        assert!(probability > 0.9);
    }

    #[test]
    fn test_low_tone_near_lag_range_end() {
        // The period of a 110 Hz tone at this frame length falls just
        // outside the lag range, so the dip walk ends at the last lag
        // and the boundary interpolation rule applies.
        let mut frame = [0.0f32; FRAME_LENGTH];
        mix_sine(&mut frame, 110.0, 1.0, 0.0);
        let (frequency, probability) = analyze_frame(&frame);
        assert!((frequency - 110.0).abs() <= 1.0);
        assert!(probability > 0.9);
    }

    #[test]
    fn test_silent_frame() {
        let frame = [0.0f32; FRAME_LENGTH];
        let mut scratch = [0.0f32; FRAME_LENGTH / 2];
        let mut estimator = Estimator::new(FRAME_LENGTH, &mut scratch, SAMPLE_RATE).unwrap();
        estimator.analyze(&frame, DEFAULT_THRESHOLD).unwrap();
        assert!(!estimator.is_valid());
        assert_eq!(estimator.frequency(), -1.0);
        assert_eq!(estimator.probability(), 0.0);
    }

    #[test]
    fn test_initial_state() {
        let mut scratch = [0.0f32; FRAME_LENGTH / 2];
        let estimator = Estimator::new(FRAME_LENGTH, &mut scratch, SAMPLE_RATE).unwrap();
        assert!(!estimator.is_valid());
        assert_eq!(estimator.frequency(), -1.0);
        assert_eq!(estimator.probability(), 0.0);
        assert_eq!(estimator.half_window_size(), FRAME_LENGTH / 2);
        assert_eq!(estimator.sample_rate(), SAMPLE_RATE);
    }

    #[test]
    fn test_repeat_analysis_is_bit_identical() {
        let mut frame = [0.0f32; FRAME_LENGTH];
        mix_sine(&mut frame, 220.0, 1.0, 0.0);
        let mut scratch = [0.0f32; FRAME_LENGTH / 2];
        let mut estimator = Estimator::new(FRAME_LENGTH, &mut scratch, SAMPLE_RATE).unwrap();

        estimator.analyze(&frame, DEFAULT_THRESHOLD).unwrap();
        let first = (
            estimator.frequency().to_bits(),
            estimator.probability().to_bits(),
        );
        estimator.analyze(&frame, DEFAULT_THRESHOLD).unwrap();
        let second = (
            estimator.frequency().to_bits(),
            estimator.probability().to_bits(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_recovers_after_silent_frame() {
        let mut tone = [0.0f32; FRAME_LENGTH];
        mix_sine(&mut tone, 220.0, 1.0, 0.0);
        let silence = [0.0f32; FRAME_LENGTH];
        let mut scratch = [0.0f32; FRAME_LENGTH / 2];
        let mut estimator = Estimator::new(FRAME_LENGTH, &mut scratch, SAMPLE_RATE).unwrap();

        estimator.analyze(&tone, DEFAULT_THRESHOLD).unwrap();
        let first_frequency = estimator.frequency().to_bits();
        assert!(estimator.is_valid());

        estimator.analyze(&silence, DEFAULT_THRESHOLD).unwrap();
        assert!(!estimator.is_valid());
        assert_eq!(estimator.probability(), 0.0);

        estimator.analyze(&tone, DEFAULT_THRESHOLD).unwrap();
        assert!(estimator.is_valid());
        assert_eq!(estimator.frequency().to_bits(), first_frequency);
    }

    #[test]
    fn test_rejects_too_short_frame() {
        let mut scratch = [0.0f32; 2];
        let result = Estimator::new(5, &mut scratch, SAMPLE_RATE);
        assert_eq!(result.err(), Some(Error::FrameTooShort(5)));
    }

    #[test]
    fn test_rejects_scratch_size_mismatch() {
        let mut scratch = [0.0f32; 300];
        let result = Estimator::new(FRAME_LENGTH, &mut scratch, SAMPLE_RATE);
        assert_eq!(
            result.err(),
            Some(Error::ScratchSizeMismatch {
                expected: 400,
                actual: 300,
            })
        );
    }

    #[test]
    fn test_rejects_bad_sample_rate() {
        for bad_rate in [0.0, -44100.0, f32::NAN] {
            let mut scratch = [0.0f32; FRAME_LENGTH / 2];
            let result = Estimator::new(FRAME_LENGTH, &mut scratch, bad_rate);
            assert!(matches!(result, Err(Error::InvalidSampleRate(_))));
        }
    }

    #[test]
    fn test_rejects_frame_size_mismatch() {
        let mut frame = [0.0f32; FRAME_LENGTH];
        mix_sine(&mut frame, 220.0, 1.0, 0.0);
        let mut scratch = [0.0f32; FRAME_LENGTH / 2];
        let mut estimator = Estimator::new(FRAME_LENGTH, &mut scratch, SAMPLE_RATE).unwrap();
        let result = estimator.analyze(&frame[..FRAME_LENGTH - 1], DEFAULT_THRESHOLD);
        assert_eq!(
            result,
            Err(Error::FrameSizeMismatch {
                expected: FRAME_LENGTH,
                actual: FRAME_LENGTH - 1,
            })
        );
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let frame = [0.0f32; FRAME_LENGTH];
        let mut scratch = [0.0f32; FRAME_LENGTH / 2];
        let mut estimator = Estimator::new(FRAME_LENGTH, &mut scratch, SAMPLE_RATE).unwrap();
        for bad_threshold in [0.0, 1.0, -0.1, 1.5, f32::NAN] {
            let result = estimator.analyze(&frame, bad_threshold);
            assert!(matches!(result, Err(Error::InvalidThreshold(_))));
        }
    }
}
