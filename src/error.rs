/// Library-wide error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Grid indices outside `[0, weeks) x [0, days)`.  Never produced by
    /// well-formed input; indicates an internal consistency bug in the caller.
    #[error("cell ({week}, {day}) is outside the {weeks}x{days} grid")]
    OutOfRange {
        week: usize,
        day: usize,
        weeks: usize,
        days: usize,
    },

    /// Contribution data that fails validation at construction time.
    /// No partial grid is ever produced.
    #[error("malformed contribution grid: {0}")]
    MalformedGrid(String),

    /// Unrecognized strategy selector.  The library never substitutes a
    /// default; that policy belongs to the front end.
    #[error("unknown strategy '{0}' (expected one of: column, row, random)")]
    UnknownStrategy(String),

    /// Output path with an extension no provider handles.
    #[error("unsupported output format '{0}' (supported: gif)")]
    UnsupportedFormat(String),

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
