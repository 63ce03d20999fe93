use anyhow::{anyhow, Result};
use image::GrayImage;
use std::process::Command;
use tempfile::NamedTempFile;

use super::setup::TesseractPaths;

/// Only digits can appear on a number token.
const DIGIT_WHITELIST: &str = "tessedit_char_whitelist=0123456789";

/// Represents a line of OCR text with confidence score
#[derive(Debug, Clone)]
pub struct OcrLine {
    pub text: String,
    pub words: Vec<OcrWord>,
    pub confidence: f32,
}

/// Represents a single word from OCR with confidence score
#[derive(Debug, Clone)]
pub struct OcrWord {
    pub text: String,
    pub confidence: f32,
}

/// Runs Tesseract on a preprocessed grayscale crop, restricted to digits.
/// Returns structured output with lines and confidence scores.
pub fn recognize_image(
    img: &GrayImage,
    paths: &TesseractPaths,
    page_seg_mode: u8,
) -> Result<Vec<OcrLine>> {
    // Save image to temporary file
    let temp_input = NamedTempFile::with_suffix(".png")?;
    img.save(temp_input.path())?;

    // Create temporary output file (Tesseract adds .tsv extension)
    let temp_output = NamedTempFile::new()?;
    let output_base = temp_output.path().to_string_lossy().to_string();

    let output = Command::new(&paths.executable)
        .arg(temp_input.path())
        .arg(&output_base)
        .arg("--tessdata-dir")
        .arg(&paths.tessdata)
        .arg("-l")
        .arg("eng")
        .arg("--psm")
        .arg(page_seg_mode.to_string())
        .arg("-c")
        .arg(DIGIT_WHITELIST)
        .arg("tsv")
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("Tesseract failed: {}", stderr));
    }

    let tsv_path = format!("{}.tsv", output_base);
    let tsv_content = std::fs::read_to_string(&tsv_path)
        .map_err(|e| anyhow!("Failed to read Tesseract output: {}", e))?;

    let _ = std::fs::remove_file(&tsv_path);

    Ok(parse_tsv_output(&tsv_content))
}

/// Groups word-level TSV rows into lines.
///
/// TSV fields: level, page_num, block_num, par_num, line_num, word_num,
/// left, top, width, height, conf, text. Only level 5 (word) rows with a
/// non-negative confidence and non-empty text are kept.
fn parse_tsv_output(tsv: &str) -> Vec<OcrLine> {
    let mut lines: Vec<OcrLine> = Vec::new();
    let mut current_key: Option<(i32, i32, i32)> = None;
    let mut current_words: Vec<OcrWord> = Vec::new();

    for line in tsv.lines().skip(1) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 12 {
            continue;
        }

        let level: i32 = fields[0].parse().unwrap_or(-1);
        let conf: f32 = fields[10].parse().unwrap_or(-1.0);
        let text = fields[11].trim();

        if level != 5 || text.is_empty() || conf < 0.0 {
            continue;
        }

        // Sparse text mode scatters words across blocks, so a line is
        // identified by block, paragraph, and line number together
        let key = (
            fields[2].parse().unwrap_or(-1),
            fields[3].parse().unwrap_or(-1),
            fields[4].parse().unwrap_or(-1),
        );

        if current_key.is_some_and(|k| k != key) {
            push_line(&mut lines, std::mem::take(&mut current_words));
        }
        current_key = Some(key);

        current_words.push(OcrWord {
            text: text.to_string(),
            confidence: conf,
        });
    }

    push_line(&mut lines, current_words);
    lines
}

fn push_line(lines: &mut Vec<OcrLine>, words: Vec<OcrWord>) {
    if words.is_empty() {
        return;
    }

    let confidence = words.iter().map(|w| w.confidence).sum::<f32>() / words.len() as f32;
    let text = words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    lines.push(OcrLine {
        text,
        words,
        confidence,
    });
}
