use thiserror::Error;

/// The error type returned when an [Estimator](crate::yin::Estimator)
/// is created with, or fed, arguments that violate its preconditions.
///
/// A frame that simply contains no discernable pitch is not an error.
/// It is reported through the frequency sentinel instead.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The frame is too short to derive a searchable lag profile from.
    #[error("Frame length {0} is too short. Must be at least 6 samples")]
    FrameTooShort(usize),
    /// The caller supplied scratch buffer does not have one slot per lag.
    #[error("Invalid scratch buffer length: {actual}. Must equal half the frame length ({expected})")]
    ScratchSizeMismatch { expected: usize, actual: usize },
    /// The analyzed frame does not match the length the estimator was created for.
    #[error("Invalid frame length: {actual}. Must equal twice the half window size ({expected})")]
    FrameSizeMismatch { expected: usize, actual: usize },
    #[error("Invalid sample rate: {0} Hz. Must be positive")]
    InvalidSampleRate(f32),
    #[error("Invalid threshold: {0}. Must be strictly between 0 and 1")]
    InvalidThreshold(f32),
}

/// Alias for a `Result` with the error type [Error].
pub type Result<T> = core::result::Result<T, Error>;
