//! A rust implementation of the YIN [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29) estimation algorithm,
//! described in the paper [YIN, a fundamental frequency estimator for speech and music](http://audition.ens.fr/adc/pdf/2002_JASA_YIN.pdf)
//! by Alain de Cheveigné and Hideki Kawahara. The algorithm estimates the fundamental
//! frequency of monophonic, primarily musical, sounds. It cannot detect multiple
//! simultaneous pitches, like in a musical chord.
//!
//! The implementation is suitable for real time use:
//! * No memory is allocated. Intermediate lag values go into a caller owned scratch buffer.
//! * The analysis runs in bounded time with no I/O and no locking.
//! * The difference profile is computed in the time domain, which keeps the numerical
//!   behavior of the estimate independent of any transform size choices. The cost is
//!   quadratic in the lag count, so keep frames as short as the lowest pitch of
//!   interest allows.
//!
//! # Example
//! ```
//! use micropitch::yin::{Estimator, DEFAULT_THRESHOLD};
//!
//! // Create a frame containing a pure tone at 220 Hz.
//! let sample_rate = 44100.0;
//! let sine_frequency = 220.0;
//! let frame_length = 800;
//! let mut frame: Vec<f32> = vec![0.0; frame_length];
//! for i in 0..frame.len() {
//!     let sine_value = (2.0 * core::f32::consts::PI * sine_frequency * (i as f32) / sample_rate).sin();
//!     frame[i] = sine_value;
//! }
//!
//! // Create an estimator borrowing a scratch buffer of half the frame length.
//! let mut scratch: Vec<f32> = vec![0.0; frame_length / 2];
//! let mut estimator = Estimator::new(frame_length, &mut scratch, sample_rate).unwrap();
//!
//! // Analyze the frame and inspect the outcome.
//! estimator.analyze(&frame, DEFAULT_THRESHOLD).unwrap();
//! assert!(estimator.is_valid());
//! assert!((estimator.frequency() - sine_frequency).abs() <= 1.0);
//! assert!(estimator.probability() > 0.9);
//! ```
//! # A note on probability and false positives
//! The reported probability is the periodicity of the frame at the detected
//! period, defined as one minus the normalized difference value at the chosen
//! lag. A pure tone scores close to one. Noisy input that happens to dip below
//! the threshold at some lag can still report a seemingly confident value for
//! a single frame, so applications tracking pitch over time should combine
//! consecutive estimates rather than trust one frame in isolation.

mod estimator;
mod util;

pub use estimator::{Estimator, DEFAULT_THRESHOLD};
