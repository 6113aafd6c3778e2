use std::ops::Range;

use crate::models::fields::{FILLER, MRZ_LINE_LEN};
use crate::utils::MrzError;
use crate::validation::checksum;
use crate::validation::grammar;

/// Checks that a two-line MRZ code follows the TD3 standard: structural
/// grammar on both lines, the four field check digits, and the master
/// check digit.
///
/// Line 1 is only evaluated when `ignore_first_line` is false; visual-line
/// OCR is noticeably less reliable than the data line, so callers often
/// accept it sight unseen.
pub struct PassportChecker {
    line1: String,
    line2: String,
    ignore_first_line: bool,
    reasons: Vec<String>,
}

impl PassportChecker {
    pub fn new(line1: impl Into<String>, line2: impl Into<String>, ignore_first_line: bool) -> Self {
        PassportChecker {
            line1: line1.into(),
            line2: line2.into(),
            ignore_first_line,
            reasons: Vec::new(),
        }
    }

    /// Runs every check and reports whether the record is a valid TD3
    /// passport. A second-line grammar failure short-circuits the checksum
    /// checkpoints, since their slicing assumes the line's fixed shape.
    pub fn is_correct(&mut self) -> bool {
        self.reasons.clear();

        let first = self.ignore_first_line || self.check_first_line();
        if !self.check_second_line() {
            return false;
        }

        let document_number = self.check_checkpoint(&[0..9], 9, "First");
        let birth_date = self.check_checkpoint(&[13..19], 19, "Second");
        let expiry_date = self.check_checkpoint(&[21..27], 27, "Third");
        let optional_data = self.check_optional_data();
        let master = self.check_checkpoint(&[0..10, 13..20, 21..43], 43, "Master");

        first && document_number && birth_date && expiry_date && optional_data && master
    }

    /// The reasons accumulated by the most recent [`is_correct`] run, or
    /// `None` when every evaluated check passed.
    ///
    /// [`is_correct`]: Self::is_correct
    pub fn get_reasons_failing(&self) -> Option<&[String]> {
        if self.reasons.is_empty() {
            None
        } else {
            Some(&self.reasons)
        }
    }

    fn check_first_line(&mut self) -> bool {
        if self.line1.chars().count() != MRZ_LINE_LEN {
            self.reasons.push("First line is not 44 characters".to_string());
            return false;
        }
        if !grammar::first_line_matches(&self.line1) {
            self.reasons
                .push(MrzError::GrammarMismatch("first line".to_string()).to_string());
            return false;
        }
        true
    }

    fn check_second_line(&mut self) -> bool {
        if self.line2.chars().count() != MRZ_LINE_LEN {
            self.reasons.push("Second line is not 44 characters".to_string());
            return false;
        }
        if !grammar::second_line_matches(&self.line2) {
            self.reasons
                .push(MrzError::GrammarMismatch("second line".to_string()).to_string());
            return false;
        }
        true
    }

    fn check_checkpoint(&mut self, intervals: &[Range<usize>], check_index: usize, name: &str) -> bool {
        match checksum::verify(&self.line2, intervals, check_index) {
            Ok(true) => true,
            Ok(false) => {
                self.reasons
                    .push(MrzError::ChecksumMismatch(name.to_string()).to_string());
                false
            }
            Err(err) => {
                self.reasons.push(err.to_string());
                false
            }
        }
    }

    /// The optional-data checkpoint. Issuers that leave the field unused
    /// may pad the check-digit position with filler as well; such an
    /// all-filler block is accepted without checksum arithmetic.
    fn check_optional_data(&mut self) -> bool {
        let block: String = self.line2.chars().skip(28).take(15).collect();
        if !block.is_empty() && block.chars().all(|c| c == FILLER) {
            return true;
        }
        self.check_checkpoint(&[28..42], 42, "Fourth")
    }
}
