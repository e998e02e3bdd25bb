use thiserror::Error;

/// All kinds of errors in this crate.
///
/// The rule-file parser skips malformed lines instead of failing, so this only covers the
/// conditions a caller has to decide about.
#[derive(Debug, Error)]
pub enum Error {
    #[error("rotate4 symmetry is not supported for a neighborhood of {0} cells")]
    UnsupportedNeighborhood(usize),

    #[error("invalid RLE pattern: {0}")]
    Pattern(#[from] ca_formats::rle::Error),

    #[error("pattern of {width} x {height} cells is too large")]
    PatternTooLarge { width: u64, height: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
