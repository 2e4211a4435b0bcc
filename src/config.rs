use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::SplitError;

/// Maximum allowed deviation of the ratio sum from 1.0.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Command-line arguments for splitting an images/labels folder pair.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory containing the source .jpg images
    #[arg(short = 'i', long = "images_dir", required_unless_present = "config")]
    pub images_dir: Option<PathBuf>,

    /// Directory containing the matching .txt label files
    #[arg(short = 'l', long = "labels_dir", required_unless_present = "config")]
    pub labels_dir: Option<PathBuf>,

    /// Directory the split dataset tree is written into
    #[arg(short = 'o', long = "output_dir", required_unless_present = "config")]
    pub output_dir: Option<PathBuf>,

    /// Proportion of the dataset to use for training
    #[arg(long = "train_size", default_value_t = 0.7, value_parser = validate_size)]
    pub train_size: f64,

    /// Proportion of the dataset to use for validation
    #[arg(long = "val_size", default_value_t = 0.2, value_parser = validate_size)]
    pub val_size: f64,

    /// Proportion of the dataset to use for testing
    #[arg(long = "test_size", default_value_t = 0.1, value_parser = validate_size)]
    pub test_size: f64,

    /// Seed for random shuffling; omit for a different split every run
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// JSON file holding a full split configuration; replaces the flags above
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Ordered class names written to dataset.yaml
    #[arg(long = "names", use_value_delimiter = true)]
    pub names: Vec<String>,
}

// Validate that a ratio is between 0.0 and 1.0
fn validate_size(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if (0.0..=1.0).contains(&val) => Ok(val),
        _ => Err("SIZE must be between 0.0 and 1.0".to_string()),
    }
}

/// Resolved configuration for one split run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub images_dir: PathBuf,
    pub labels_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default = "default_train_ratio")]
    pub train_ratio: f64,
    #[serde(default = "default_val_ratio")]
    pub val_ratio: f64,
    #[serde(default = "default_test_ratio")]
    pub test_ratio: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub names: Vec<String>,
}

fn default_train_ratio() -> f64 {
    0.7
}

fn default_val_ratio() -> f64 {
    0.2
}

fn default_test_ratio() -> f64 {
    0.1
}

impl SplitConfig {
    /// Build a config from parsed CLI arguments, reading the `--config` file
    /// instead when one is given.
    pub fn from_args(args: &Args) -> Result<Self, SplitError> {
        if let Some(path) = &args.config {
            return Self::from_file(path);
        }
        let require =
            |dir: &Option<PathBuf>| dir.clone().expect("enforced by clap unless --config is set");
        Ok(Self {
            images_dir: require(&args.images_dir),
            labels_dir: require(&args.labels_dir),
            output_dir: require(&args.output_dir),
            train_ratio: args.train_size,
            val_ratio: args.val_size,
            test_ratio: args.test_size,
            seed: args.seed,
            names: args.names.clone(),
        })
    }

    /// Deserialize a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, SplitError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Check that the three ratios are sane before touching the filesystem.
    pub fn validate_ratios(&self) -> Result<(), SplitError> {
        let sum = self.train_ratio + self.val_ratio + self.test_ratio;
        let in_range = [self.train_ratio, self.val_ratio, self.test_ratio]
            .iter()
            .all(|r| (0.0..=1.0).contains(r));
        if !in_range || (sum - 1.0).abs() > RATIO_TOLERANCE {
            return Err(SplitError::InvalidRatio { sum });
        }
        Ok(())
    }
}
