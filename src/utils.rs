use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar with the given length and segment label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .expect("progress bar template is valid")
            .progress_chars("#>-"),
    );
    pb
}
