use micromath::F32Ext;

/// Converts a power level in dB to a linear gain ratio: 10 dB is a
/// tenfold gain.
pub fn db_to_gain(db: f32) -> f32 {
    F32Ext::powf(10.0, db / 10.0)
}

/// Converts a linear gain ratio to a power level in dB: a tenfold gain
/// is 10 dB.
pub fn gain_to_db(gain: f32) -> f32 {
    10.0 * F32Ext::log10(gain)
}
