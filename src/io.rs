use glob::glob;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::SplitError;
use crate::types::{OutputDirs, SamplePair, Segment, IMAGE_EXT, LABEL_EXT};
use crate::utils::create_progress_bar;

/// Enumerate `.jpg` files in `images_dir` and pair each with its `.txt` label
/// in `labels_dir`. Candidates without a label are warned about and skipped.
pub fn discover_pairs(images_dir: &Path, labels_dir: &Path) -> Result<Vec<SamplePair>, SplitError> {
    let pattern = format!("{}/*.{}", images_dir.display(), IMAGE_EXT);
    let candidates: Vec<_> = glob(&pattern)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?
        .filter_map(|entry| entry.ok())
        .collect();

    if candidates.is_empty() {
        return Err(SplitError::NoImagesFound {
            path: images_dir.to_path_buf(),
        });
    }
    info!("Found {} candidate image files", candidates.len());

    let mut pairs = Vec::with_capacity(candidates.len());
    for image_path in candidates {
        let (Some(name), Some(stem)) = (
            image_path.file_name().and_then(|n| n.to_str()),
            image_path.file_stem().and_then(|s| s.to_str()),
        ) else {
            warn!("Skipping non-UTF-8 file name: {:?}", image_path);
            continue;
        };
        let label = format!("{}.{}", stem, LABEL_EXT);
        if labels_dir.join(&label).exists() {
            pairs.push(SamplePair {
                image: name.to_string(),
                label,
            });
        } else {
            warn!("Image {} has no label file {}, skipping it", name, label);
        }
    }

    if pairs.is_empty() {
        return Err(SplitError::NoValidPairs);
    }
    Ok(pairs)
}

/// Set up the six-directory structure for the split dataset output.
///
/// Directories that already exist are left as they are, along with any files
/// inside them, so re-running on a populated output tree is safe.
pub fn setup_output_directories(output_dir: &Path) -> std::io::Result<OutputDirs> {
    let dirs = OutputDirs::new(output_dir);
    for dir in dirs.all() {
        fs::create_dir_all(dir)?;
    }
    Ok(dirs)
}

/// Copy one segment's pairs into its images/labels destinations, in order.
///
/// Fail-fast: the first pair whose image or label cannot be copied aborts the
/// segment; pairs copied before it are left in place.
pub fn copy_pairs(
    pairs: &[SamplePair],
    segment: Segment,
    images_dir: &Path,
    labels_dir: &Path,
    output_dirs: &OutputDirs,
) -> Result<(), SplitError> {
    if pairs.is_empty() {
        return Ok(());
    }
    let (images_dst, labels_dst) = output_dirs.for_segment(segment);
    let pb = create_progress_bar(pairs.len() as u64, segment.as_str());
    for pair in pairs {
        copy_pair(pair, images_dir, labels_dir, images_dst, labels_dst).map_err(|source| {
            SplitError::Copy {
                image: pair.image.clone(),
                label: pair.label.clone(),
                source,
            }
        })?;
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} copy complete", segment));
    Ok(())
}

fn copy_pair(
    pair: &SamplePair,
    images_src: &Path,
    labels_src: &Path,
    images_dst: &Path,
    labels_dst: &Path,
) -> std::io::Result<()> {
    let image_out = images_dst.join(sanitize_filename::sanitize(&pair.image));
    let label_out = labels_dst.join(sanitize_filename::sanitize(&pair.label));
    copy_preserving_mtime(&images_src.join(&pair.image), &image_out)?;
    copy_preserving_mtime(&labels_src.join(&pair.label), &label_out)?;
    Ok(())
}

// Copy a file and carry the source's modified time over to the destination.
// fs::copy alone keeps permissions but stamps a fresh mtime.
fn copy_preserving_mtime(src: &Path, dst: &Path) -> std::io::Result<()> {
    let modified = fs::metadata(src)?.modified()?;
    fs::copy(src, dst)?;
    let dst_file = File::options().write(true).open(dst)?;
    dst_file.set_times(fs::FileTimes::new().set_modified(modified))
}

/// Create the dataset.yaml file for YOLO training
pub fn create_dataset_yaml(output_dir: &Path, names: &[String]) -> std::io::Result<()> {
    let mut dataset_yaml = BufWriter::new(File::create(output_dir.join("dataset.yaml"))?);
    let absolute_path = fs::canonicalize(output_dir)?;
    let mut yaml_content = format!(
        "path: {}\ntrain: images/train\nval: images/val\ntest: images/test\n",
        absolute_path.to_string_lossy()
    );
    yaml_content.push_str("\nnames:\n");
    for (id, name) in names.iter().enumerate() {
        yaml_content.push_str(&format!("    {}: {}\n", id, name));
    }
    dataset_yaml.write_all(yaml_content.as_bytes())
}
