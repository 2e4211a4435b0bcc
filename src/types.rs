use std::fmt;
use std::path::{Path, PathBuf};

/// Extension of candidate image files in the source directory.
pub const IMAGE_EXT: &str = "jpg";
/// Extension of the label file paired with each image.
pub const LABEL_EXT: &str = "txt";

// An image file and the label file sharing its stem. Both fields are plain
// file names inside their respective input directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplePair {
    pub image: String,
    pub label: String,
}

/// The three dataset segments, in slicing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Train,
    Val,
    Test,
}

impl Segment {
    pub fn as_str(self) -> &'static str {
        match self {
            Segment::Train => "train",
            Segment::Val => "val",
            Segment::Test => "test",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// The shuffled pairs sliced into three contiguous, disjoint segments.
pub struct SplitSets {
    pub train: Vec<SamplePair>,
    pub val: Vec<SamplePair>,
    pub test: Vec<SamplePair>,
}

impl SplitSets {
    pub fn segments(&self) -> [(Segment, &[SamplePair]); 3] {
        [
            (Segment::Train, &self.train),
            (Segment::Val, &self.val),
            (Segment::Test, &self.test),
        ]
    }

    pub fn total(&self) -> usize {
        self.train.len() + self.val.len() + self.test.len()
    }
}

// Struct to hold the paths to the output directories for train/val/test splits
pub struct OutputDirs {
    pub train_images_dir: PathBuf,
    pub val_images_dir: PathBuf,
    pub test_images_dir: PathBuf,
    pub train_labels_dir: PathBuf,
    pub val_labels_dir: PathBuf,
    pub test_labels_dir: PathBuf,
}

impl OutputDirs {
    /// Lay out the fixed six-directory tree under `output_dir`.
    pub fn new(output_dir: &Path) -> Self {
        let images_dir = output_dir.join("images");
        let labels_dir = output_dir.join("labels");
        Self {
            train_images_dir: images_dir.join("train"),
            val_images_dir: images_dir.join("val"),
            test_images_dir: images_dir.join("test"),
            train_labels_dir: labels_dir.join("train"),
            val_labels_dir: labels_dir.join("val"),
            test_labels_dir: labels_dir.join("test"),
        }
    }

    pub fn all(&self) -> [&Path; 6] {
        [
            &self.train_images_dir,
            &self.val_images_dir,
            &self.test_images_dir,
            &self.train_labels_dir,
            &self.val_labels_dir,
            &self.test_labels_dir,
        ]
    }

    /// The (images, labels) destination pair for one segment.
    pub fn for_segment(&self, segment: Segment) -> (&Path, &Path) {
        match segment {
            Segment::Train => (&self.train_images_dir, &self.train_labels_dir),
            Segment::Val => (&self.val_images_dir, &self.val_labels_dir),
            Segment::Test => (&self.test_images_dir, &self.test_labels_dir),
        }
    }
}

/// Count and example pair for one finished segment.
#[derive(Debug, Clone)]
pub struct SegmentSummary {
    pub count: usize,
    pub example: Option<SamplePair>,
}

impl SegmentSummary {
    fn new(pairs: &[SamplePair]) -> Self {
        Self {
            count: pairs.len(),
            example: pairs.first().cloned(),
        }
    }
}

/// What a completed split run produced.
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub train: SegmentSummary,
    pub val: SegmentSummary,
    pub test: SegmentSummary,
}

impl SplitReport {
    pub fn new(sets: &SplitSets) -> Self {
        Self {
            train: SegmentSummary::new(&sets.train),
            val: SegmentSummary::new(&sets.val),
            test: SegmentSummary::new(&sets.test),
        }
    }

    pub fn total(&self) -> usize {
        self.train.count + self.val.count + self.test.count
    }

    pub fn log_summary(&self) {
        log::info!("=== Split Summary ===");
        let segments = [
            (Segment::Train, &self.train),
            (Segment::Val, &self.val),
            (Segment::Test, &self.test),
        ];
        for (segment, summary) in segments {
            log::info!("{}: {} pairs", segment, summary.count);
            if let Some(pair) = &summary.example {
                log::info!("  example: {} -> {}", pair.image, pair.label);
            }
        }
        log::info!("total: {} pairs", self.total());
    }
}
