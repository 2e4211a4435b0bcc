use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::io::{copy_pairs, create_dataset_yaml, discover_pairs, setup_output_directories};
use crate::types::{SamplePair, SplitReport, SplitSets};

/// Shuffle the valid pairs and slice them into contiguous train/val/test
/// segments.
///
/// Train and val counts are floored; test takes whatever rounding leaves over,
/// so the three segments always cover every pair exactly once.
pub fn split_pairs(
    mut pairs: Vec<SamplePair>,
    train_ratio: f64,
    val_ratio: f64,
    seed: Option<u64>,
) -> SplitSets {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    pairs.shuffle(&mut rng);

    let total = pairs.len();
    let train_count = ((total as f64 * train_ratio).floor() as usize).min(total);
    let val_count = ((total as f64 * val_ratio).floor() as usize).min(total - train_count);

    let test = pairs.split_off(train_count + val_count);
    let val = pairs.split_off(train_count);
    SplitSets {
        train: pairs,
        val,
        test,
    }
}

/// Run a complete split: validate, discover pairs, shuffle, slice, and copy
/// everything into the output tree.
///
/// All validation happens before the output directory is touched. Source
/// files are only ever read, never moved or deleted.
pub fn run_split(config: &SplitConfig) -> Result<SplitReport, SplitError> {
    config.validate_ratios()?;
    for dir in [&config.images_dir, &config.labels_dir] {
        if !dir.exists() {
            return Err(SplitError::MissingDirectory { path: dir.clone() });
        }
    }

    let pairs = discover_pairs(&config.images_dir, &config.labels_dir)?;
    info!("Found {} valid image-label pairs", pairs.len());

    let sets = split_pairs(pairs, config.train_ratio, config.val_ratio, config.seed);
    info!(
        "Split sizes: train {} / val {} / test {}",
        sets.train.len(),
        sets.val.len(),
        sets.test.len()
    );

    let output_dirs = setup_output_directories(&config.output_dir)?;
    for (segment, pairs) in sets.segments() {
        copy_pairs(
            pairs,
            segment,
            &config.images_dir,
            &config.labels_dir,
            &output_dirs,
        )?;
    }

    create_dataset_yaml(&config.output_dir, &config.names)?;

    Ok(SplitReport::new(&sets))
}
