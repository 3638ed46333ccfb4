use micromath::F32Ext;

/// Converts a frequency in Hz to a [MIDI](https://en.wikipedia.org/wiki/MIDI) note number (with a fractional part).
/// Note 69 corresponds to 440 Hz.
pub fn freq_to_midi_note(freq: f32) -> f32 {
    12.0 * F32Ext::log2(freq) - 36.376316562295926
}

/// Converts a [MIDI](https://en.wikipedia.org/wiki/MIDI) note number (possibly with a fractional part)
/// to a frequency in Hz. Note 69 corresponds to 440 Hz.
pub fn midi_note_to_freq(note: f32) -> f32 {
    440.0 * F32Ext::powf(2.0, (note - 69.0) / 12.0)
}
