//! A biquad filter section designed from musician friendly parameters,
//! following the classic [cookbook](https://www.w3.org/TR/audio-eq-cookbook/)
//! equations. Eight response types are supported: low pass, high pass,
//! band pass, notch, peaking EQ, low shelf, high shelf and all pass.
//!
//! A typical use together with the pitch estimator is band limiting
//! the input signal before analysis, for example to suppress hum or
//! hiss outside the pitch range of the instrument at hand.
//!
//! # Examples
//! ```
//! use micropitch::biquad::{BiquadFilter, FilterType};
//!
//! let sample_rate = 44100.0;
//! // A low pass filter with a 1 kHz cutoff and a one octave wide
//! // transition region. The gain parameter is ignored by this type.
//! let mut filter = BiquadFilter::new(FilterType::LowPass, 0.0, 1000.0, sample_rate, 1.0);
//!
//! // Feed the filter a 10 kHz tone, well above the cutoff.
//! let mut power = 0.0;
//! let mut sample_count = 0;
//! for i in 0..4096 {
//!     let input = (2.0 * core::f32::consts::PI * 10000.0 * (i as f32) / sample_rate).sin();
//!     let output = filter.process(input);
//!     // Skip the transient before measuring.
//!     if i >= 2048 {
//!         power += output * output;
//!         sample_count += 1;
//!     }
//! }
//! let rms = (power / (sample_count as f32)).sqrt();
//! // The tone comes out strongly attenuated.
//! assert!(rms < 0.1);
//! ```

mod filter;

pub use filter::{BiquadFilter, FilterType};
