// Structural grammar of the two TD3 lines. The patterns decide shape only;
// check-digit arithmetic lives in the checksum module.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Document type P, a country-code variant character, the issuing
    // country (three letters, or one letter padded with fillers as on
    // German passports), then <<-separated name components of two or more
    // letters and the trailing filler run.
    static ref FIRST_LINE: Regex =
        Regex::new("^P[A-Z<][A-Z](([A-Z][A-Z<])|(<<))([A-Z]{2,}<?)*<<([A-Z]{2,}<?)*<*$")
            .expect("first line pattern is valid");

    // Document number block, nationality, birth date block, gender, expiry
    // date block, optional data block (or all filler), master check digit.
    static ref SECOND_LINE: Regex = Regex::new(
        "^[A-Z0-9<]{9}[0-9]([A-Z]([A-Z][A-Z<]|<<))[0-9]{7}[FM<][0-9]{7}([A-Z0-9<]{14}[0-9]|<{15})[0-9]$"
    )
    .expect("second line pattern is valid");
}

/// Whether the visual/name line matches the TD3 structural pattern. Length
/// is not checked here: the trailing filler run is open-ended, so the
/// caller enforces the 44-character shape.
pub fn first_line_matches(line: &str) -> bool {
    FIRST_LINE.is_match(line)
}

/// Whether the data line decomposes into the fixed TD3 blocks.
pub fn second_line_matches(line: &str) -> bool {
    SECOND_LINE.is_match(line)
}
