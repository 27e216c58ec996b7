use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while catalog documents are downloaded. indicatif
/// hides it when stderr is not a terminal, so piped output stays clean.
pub fn catalog_spinner(url: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(format!("Fetching catalog {url}"));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
