use micromath::F32Ext;

/// The response shapes a [BiquadFilter] can be designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    LowPass,
    HighPass,
    /// Band pass with 0 dB peak gain at the center frequency.
    BandPass,
    Notch,
    /// Peaking band EQ. The only type besides the shelves that uses the gain parameter.
    PeakingEq,
    LowShelf,
    HighShelf,
    AllPass,
}

/// A second order IIR filter section with coefficients derived from
/// musician friendly parameters (center frequency, bandwidth in
/// octaves, gain in dB) using the well known cookbook design
/// equations. Processes one sample at a time in direct form I,
/// so a single instance can sit in a real time callback without
/// buffering.
pub struct BiquadFilter {
    sample_rate: f32,
    // Coefficients, normalized so that a0 == 1.
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    // Delayed input and output samples.
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

/// micromath's `F32Ext` has no sinh, so it is composed from exp.
fn sinh(x: f32) -> f32 {
    0.5 * (F32Ext::exp(x) - F32Ext::exp(-x))
}

impl BiquadFilter {
    /// Creates a filter of the given type. `db_gain` only affects the
    /// peaking EQ and shelf types. `frequency` is the center (or
    /// corner) frequency in Hz and must lie strictly between 0 and
    /// half the sample rate. `bandwidth` is measured in octaves and
    /// must be greater than 0.
    pub fn new(
        filter_type: FilterType,
        db_gain: f32,
        frequency: f32,
        sample_rate: f32,
        bandwidth: f32,
    ) -> Self {
        if sample_rate <= 0.0 {
            panic!("Sample rate must be greater than 0");
        }
        let mut filter = BiquadFilter {
            sample_rate,
            b0: 0.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        };
        filter.set_params(filter_type, db_gain, frequency, bandwidth);
        filter
    }

    /// Recomputes the coefficients for new design parameters without
    /// clearing the delay line, so a filter can be retuned while a
    /// stream is running.
    pub fn set_params(
        &mut self,
        filter_type: FilterType,
        db_gain: f32,
        frequency: f32,
        bandwidth: f32,
    ) {
        if !(frequency > 0.0 && frequency < 0.5 * self.sample_rate) {
            panic!("Center frequency must be greater than 0 and less than half the sample rate");
        }
        if !(bandwidth > 0.0) {
            panic!("Bandwidth must be greater than 0");
        }

        let a = F32Ext::powf(10.0, db_gain / 40.0);
        let omega = 2.0 * core::f32::consts::PI * frequency / self.sample_rate;
        let sn = F32Ext::sin(omega);
        let cs = F32Ext::cos(omega);
        let alpha = sn * sinh(0.5 * core::f32::consts::LN_2 * bandwidth * omega / sn);
        let beta = F32Ext::sqrt(a + a);

        let (b0, b1, b2, a0, a1, a2) = match filter_type {
            FilterType::LowPass => (
                (1.0 - cs) / 2.0,
                1.0 - cs,
                (1.0 - cs) / 2.0,
                1.0 + alpha,
                -2.0 * cs,
                1.0 - alpha,
            ),
            FilterType::HighPass => (
                (1.0 + cs) / 2.0,
                -(1.0 + cs),
                (1.0 + cs) / 2.0,
                1.0 + alpha,
                -2.0 * cs,
                1.0 - alpha,
            ),
            FilterType::BandPass => (
                alpha,
                0.0,
                -alpha,
                1.0 + alpha,
                -2.0 * cs,
                1.0 - alpha,
            ),
            FilterType::Notch => (
                1.0,
                -2.0 * cs,
                1.0,
                1.0 + alpha,
                -2.0 * cs,
                1.0 - alpha,
            ),
            FilterType::PeakingEq => (
                1.0 + alpha * a,
                -2.0 * cs,
                1.0 - alpha * a,
                1.0 + alpha / a,
                -2.0 * cs,
                1.0 - alpha / a,
            ),
            FilterType::LowShelf => (
                a * ((a + 1.0) - (a - 1.0) * cs + beta * sn),
                2.0 * a * ((a - 1.0) - (a + 1.0) * cs),
                a * ((a + 1.0) - (a - 1.0) * cs - beta * sn),
                (a + 1.0) + (a - 1.0) * cs + beta * sn,
                -2.0 * ((a - 1.0) + (a + 1.0) * cs),
                (a + 1.0) + (a - 1.0) * cs - beta * sn,
            ),
            FilterType::HighShelf => (
                a * ((a + 1.0) + (a - 1.0) * cs + beta * sn),
                -2.0 * a * ((a - 1.0) + (a + 1.0) * cs),
                a * ((a + 1.0) + (a - 1.0) * cs - beta * sn),
                (a + 1.0) - (a - 1.0) * cs + beta * sn,
                2.0 * ((a - 1.0) - (a + 1.0) * cs),
                (a + 1.0) - (a - 1.0) * cs - beta * sn,
            ),
            FilterType::AllPass => (
                1.0 - alpha,
                -2.0 * cs,
                1.0 + alpha,
                1.0 + alpha,
                -2.0 * cs,
                1.0 - alpha,
            ),
        };

        self.b0 = b0 / a0;
        self.b1 = b1 / a0;
        self.b2 = b2 / a0;
        self.a1 = a1 / a0;
        self.a2 = a2 / a0;
    }

    /// Filters one sample.
    pub fn process(&mut self, sample: f32) -> f32 {
        let result = self.b0 * sample + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = sample;

        self.y2 = self.y1;
        self.y1 = result;

        result
    }

    /// Filters a buffer of samples.
    pub fn process_buffer(&mut self, input: &[f32], output: &mut [f32]) {
        if input.len() != output.len() {
            panic!("Biquad input and output buffers must have the same size");
        }
        for (index, sample) in input.iter().enumerate() {
            output[index] = self.process(*sample);
        }
    }

    /// Clears the delay line, as if the filter had only ever seen
    /// silence. Coefficients are left untouched.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }

    /// Returns the sample rate in Hz the filter was designed for.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}
