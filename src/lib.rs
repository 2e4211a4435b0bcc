//! YOLO dataset splitter
//!
//! This library partitions a flat folder of images and a matching folder of
//! label files into train/val/test subsets, copied into the
//! `images/{train,val,test}` + `labels/{train,val,test}` tree that YOLO
//! training consumes.

pub mod config;
pub mod dataset;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use config::{Args, SplitConfig, RATIO_TOLERANCE};
pub use dataset::{run_split, split_pairs};
pub use error::SplitError;
pub use io::{copy_pairs, create_dataset_yaml, discover_pairs, setup_output_directories};
pub use types::{OutputDirs, SamplePair, Segment, SplitReport, SplitSets};
