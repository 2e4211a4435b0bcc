use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while splitting a dataset.
///
/// All validation variants are raised before any directory is created or any
/// file is copied; `Copy` is the only variant that can leave partial output
/// behind (earlier pairs stay in place, nothing is rolled back).
#[derive(Debug, Error)]
pub enum SplitError {
    #[error("split ratios must each lie in [0.0, 1.0] and sum to 1.0 ± 0.001 (got sum {sum:.3})")]
    InvalidRatio { sum: f64 },

    #[error("input directory does not exist: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("no .jpg files found in {}", .path.display())]
    NoImagesFound { path: PathBuf },

    #[error("no image has a matching label file, nothing to split")]
    NoValidPairs,

    #[error("failed to copy pair {image} / {label}: {source}")]
    Copy {
        image: String,
        label: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
