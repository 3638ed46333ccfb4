use micromath::F32Ext;

const TWO_PI: f32 = 2.0 * core::f32::consts::PI;

/// A phase accumulator sine oscillator. Frequency and amplitude are
/// passed per sample, so both can be modulated freely, for example to
/// echo a pitch detected by an [Estimator](crate::yin::Estimator).
pub struct SineOscillator {
    /// Phase increment per sample for a 1 Hz tone.
    omega: f32,
    /// Current phase in radians, kept within (-2π, 2π).
    theta: f32,
    prev: f32,
}

impl SineOscillator {
    pub fn new(sample_rate: f32) -> Self {
        if sample_rate <= 0.0 {
            panic!("Sample rate must be greater than 0");
        }
        SineOscillator {
            omega: TWO_PI / sample_rate,
            theta: 0.0,
            prev: 0.0,
        }
    }

    /// Emits the next sample, then advances the phase by one sample's
    /// worth of the given frequency. The first emitted sample is
    /// `sin(0)`, i.e. zero.
    pub fn step(&mut self, frequency_hz: f32, amplitude: f32) -> f32 {
        self.prev = amplitude * F32Ext::sin(self.theta);
        self.theta += frequency_hz * self.omega;
        // Keep -2π < theta < 2π.
        if self.theta >= TWO_PI {
            self.theta -= TWO_PI;
        } else if self.theta <= -TWO_PI {
            self.theta += TWO_PI;
        } else if self.theta.is_nan() {
            // A NaN frequency must not stick in the accumulator.
            self.theta = 0.0;
        }
        self.prev
    }

    /// Returns the most recently emitted sample without advancing the
    /// oscillator.
    pub fn prev(&self) -> f32 {
        self.prev
    }
}
