// Correction pass driven by glyph geometry: characters whose bounding-box
// height is an outlier for their presumed class get swapped through the
// confusion table. Digits render shorter than letters in OCR-B, so a "tall"
// digit read as a letter (or the reverse) is a likely misread.

use crate::models::fields::{confusion_for, MRZ_LINE_LEN};

const HIGH_LETTER_FACTOR: f64 = 1.15;
const LOW_NUMBER_FACTOR: f64 = 0.85;

/// Replaces characters in the MRZ text based on the heights of the boxes
/// that were used to recognize it. The two MRZ lines are treated
/// separately: line 1 is aligned with the first 44 height slots, line 2
/// with the next 44.
///
/// Runs on raw, not-yet-corrected text, so characters are classified by
/// what the engine actually produced. Lines where either character class is
/// absent are left untouched, since the class average is undefined there.
pub fn replace_based_on_box_heights(mrz_text: &str, box_heights: &[f64]) -> String {
    let mut lines: Vec<Vec<char>> = mrz_text.lines().map(|line| line.chars().collect()).collect();

    for (index, line) in lines.iter_mut().take(2).enumerate() {
        let start = (index * MRZ_LINE_LEN).min(box_heights.len());
        let end = (start + MRZ_LINE_LEN).min(box_heights.len());
        correct_line(line, &box_heights[start..end]);
    }

    let corrected: Vec<String> = lines.into_iter().map(|line| line.into_iter().collect()).collect();
    corrected.join("\n")
}

/// Applies the height rule to a single line, in place. Substitutions are
/// positional and never cascade: every character is judged against the
/// averages of the original line, in a single pass.
fn correct_line(line: &mut [char], heights: &[f64]) {
    let digit_heights: Vec<f64> = line
        .iter()
        .zip(heights)
        .filter(|(c, _)| c.is_ascii_digit())
        .map(|(_, h)| *h)
        .collect();
    let letter_heights: Vec<f64> = line
        .iter()
        .zip(heights)
        .filter(|(c, _)| c.is_ascii_uppercase())
        .map(|(_, h)| *h)
        .collect();

    if digit_heights.is_empty() || letter_heights.is_empty() {
        return;
    }
    let average_digit_height = digit_heights.iter().sum::<f64>() / digit_heights.len() as f64;
    let average_letter_height = letter_heights.iter().sum::<f64>() / letter_heights.len() as f64;

    for (character, &height) in line.iter_mut().zip(heights) {
        let Some(replacement) = confusion_for(*character) else {
            continue;
        };
        let high_letter =
            character.is_ascii_uppercase() && height > average_letter_height * HIGH_LETTER_FACTOR;
        let low_number =
            character.is_ascii_digit() && height < average_digit_height * LOW_NUMBER_FACTOR;
        if high_letter || low_number {
            *character = replacement;
        }
    }
}
