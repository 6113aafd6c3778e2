// ICAO Doc 9303 weighted mod-10 check digits. Characters map to values
// (digits as-is, A=10..Z=35, filler 0), values are weighted by the cycling
// 7-3-1 pattern, and the sum modulo 10 must equal the stored check digit.

use std::ops::Range;

use crate::models::fields::FILLER;
use crate::utils::MrzError;

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Converts a single MRZ character to its checksum value. Anything outside
/// A-Z, 0-9 and `<` is rejected, never silently mapped.
pub fn letter_to_number(character: char) -> Result<u32, MrzError> {
    match character {
        '0'..='9' => Ok(character as u32 - '0' as u32),
        'A'..='Z' => Ok(character as u32 - 'A' as u32 + 10),
        FILLER => Ok(0),
        other => Err(MrzError::InvalidCharacter(other)),
    }
}

/// Encodes a string of MRZ characters to checksum values.
pub fn process_characters(input: &str) -> Result<Vec<u32>, MrzError> {
    input.chars().map(letter_to_number).collect()
}

/// Applies the 7-3-1 weighting. The cycle starts at the first value and
/// keeps running across the whole sequence; callers concatenating several
/// ranges must weigh the concatenation, not the parts.
pub fn weigh_values(values: &[u32]) -> Vec<u32> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| value * WEIGHTS[index % 3])
        .collect()
}

/// Verifies the check digit at `check_index` against the characters in the
/// given intervals of `line`, concatenated in order.
///
/// Intervals or a check index beyond the end of the line fail the check, as
/// does a check position that holds no digit; an illegal MRZ character
/// inside the intervals is an `InvalidCharacter` error. Never panics on
/// malformed input.
pub fn verify(
    line: &str,
    intervals: &[Range<usize>],
    check_index: usize,
) -> Result<bool, MrzError> {
    let characters: Vec<char> = line.chars().collect();

    let mut letters = String::new();
    for interval in intervals {
        match characters.get(interval.clone()) {
            Some(slice) => letters.extend(slice),
            None => return Ok(false),
        }
    }
    let Some(check_digit) = characters.get(check_index).and_then(|c| c.to_digit(10)) else {
        return Ok(false);
    };

    let values = process_characters(&letters)?;
    let total: u32 = weigh_values(&values).iter().sum();
    Ok(total % 10 == check_digit)
}
