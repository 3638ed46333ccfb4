//! Conversions between frequencies, note numbers and levels.

mod level;
mod midi;

pub use level::{db_to_gain, gain_to_db};
pub use midi::{freq_to_midi_note, midi_note_to_freq};
