//! Building blocks for monophonic [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29) tracking,
//! built around an implementation of the YIN fundamental frequency estimation algorithm.
//! See the [`yin`] module for a description of the algorithm and its parameters.
//! The crate also provides biquad filters for conditioning signals before analysis,
//! a sine wave oscillator and conversions between frequencies, note numbers and levels.
//!
//! Features
//! * No allocations and no I/O, suitable for real time audio use.
//! * `no_std` compatible.
//! * Analysis buffers are owned by the caller, so memory layout stays under
//! the control of the embedding application.
//!
//! # Examples
//!
//! Estimate the pitch of a generated tone and convert it to a MIDI note number.
//!
//! ```
//! use micropitch::yin::{Estimator, DEFAULT_THRESHOLD};
//! use micropitch::common::freq_to_midi_note;
//!
//! let sample_rate = 44100.0;
//! let frame_length = 800;
//! let mut frame: Vec<f32> = vec![0.0; frame_length];
//! for i in 0..frame.len() {
//!     // A pure tone at concert pitch A4.
//!     let phase = 2.0 * core::f32::consts::PI * 440.0 * (i as f32) / sample_rate;
//!     frame[i] = phase.sin();
//! }
//!
//! let mut scratch: Vec<f32> = vec![0.0; frame_length / 2];
//! let mut estimator = Estimator::new(frame_length, &mut scratch, sample_rate).unwrap();
//! estimator.analyze(&frame, DEFAULT_THRESHOLD).unwrap();
//!
//! assert!(estimator.is_valid());
//! let note_number = freq_to_midi_note(estimator.frequency());
//! assert!((note_number - 69.0).abs() < 0.5);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod biquad;
pub mod common;
mod error;
pub mod osc;
pub mod yin;

pub use error::{Error, Result};
