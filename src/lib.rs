//! Board-state inference and settlement advice for hex-tile board games.
//!
//! The pipeline runs screenshot → tile geometry → resource/number
//! inference → board snapshot → position scoring → strategy ranking.
//! Every stage after acquisition and recognition is a pure function of its
//! inputs and an [`AnalysisConfig`].

pub mod analysis;
pub mod board;
pub mod capture;
pub mod config;
pub mod detection;
pub mod error;
pub mod ocr;
pub mod paths;

pub use analysis::{analyze_snapshot, AnalysisReport};
pub use capture::{BufferImageSource, FileImageSource, ImageSource};
pub use config::AnalysisConfig;
pub use detection::{NumberRecognizer, RandomNumberRecognizer};
pub use error::{AssemblyError, ImageAcquisitionError, PipelineError};

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;

/// Logs a message to both stderr and the log file with timestamp.
pub fn log(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S%.3f");
    let line = format!("[{}] {}\n", timestamp, msg);
    eprint!("{}", line);
    let log_path = paths::get_logs_dir().join("catan_advisor.log");
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        let _ = file.write_all(line.as_bytes());
    }
}

/// Acquires a screenshot, detects the board on it, then scores positions
/// and ranks strategies.
///
/// Fails without a partial result if the image cannot be acquired, a
/// number cannot be read, or the detected tiles are inconsistent.
pub fn analyze_screenshot(
    source: &dyn ImageSource,
    recognizer: &mut dyn NumberRecognizer,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, PipelineError> {
    let img = source.acquire()?;
    let snapshot = detection::detect_board(&img, recognizer, &config.geometry)?;
    Ok(analyze_snapshot(&source.describe(), snapshot, config))
}
