//! A sine oscillator for synthesizing test and reference tones.
//!
//! # Examples
//! Generating a frame of samples and recovering its pitch:
//! ```
//! use micropitch::osc::SineOscillator;
//! use micropitch::yin::{Estimator, DEFAULT_THRESHOLD};
//!
//! let sample_rate = 44100.0;
//! let mut osc = SineOscillator::new(sample_rate);
//! let frame: Vec<f32> = (0..1024).map(|_| osc.step(330.0, 1.0)).collect();
//!
//! let mut scratch: Vec<f32> = vec![0.0; frame.len() / 2];
//! let mut estimator = Estimator::new(frame.len(), &mut scratch, sample_rate).unwrap();
//! estimator.analyze(&frame, DEFAULT_THRESHOLD).unwrap();
//! assert!(estimator.is_valid());
//! assert!((estimator.frequency() - 330.0).abs() <= 2.0);
//! assert!(estimator.probability() > 0.9);
//! ```

mod sine;

pub use sine::SineOscillator;
