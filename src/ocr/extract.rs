use regex::Regex;
use std::sync::OnceLock;

use super::engine::OcrLine;
use crate::board::ProductionNumber;

/// Words below this confidence are treated as noise.
const MIN_CONFIDENCE: f32 = 30.0;

fn digits_regex() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// Every valid production number in `text`, in reading order.
///
/// Digit runs are parsed whole, so "10" is ten and "1012" is discarded
/// rather than split. Sevens and anything outside 2..=12 are dropped.
pub fn extract_numbers(text: &str) -> Vec<ProductionNumber> {
    digits_regex()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u8>().ok())
        .filter_map(ProductionNumber::new)
        .collect()
}

/// The first confident production number in Tesseract output.
///
/// A tile carries a single token, so anything after the first hit is
/// ignored.
pub fn extract_number(lines: &[OcrLine]) -> Option<ProductionNumber> {
    lines
        .iter()
        .flat_map(|line| line.words.iter())
        .filter(|word| word.confidence >= MIN_CONFIDENCE)
        .find_map(|word| extract_numbers(&word.text).into_iter().next())
}
