use serde::{Deserialize, Serialize};

use crate::models::fields::MRZ_LINE_LEN;
use crate::utils::MrzError;

/// Gates for the individual correction passes.
///
/// The passes always run in the fixed order height -> line length -> field
/// alphabets regardless of which subset is enabled: line-length repair must
/// see indices consistent with the height pass, and field-alphabet
/// correction must see final, fixed-length lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionConfig {
    pub use_height_correction: bool,
    pub fix_line_lengths: bool,
    pub apply_field_alphabets: bool,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        CorrectionConfig {
            use_height_correction: true,
            fix_line_lengths: true,
            apply_field_alphabets: true,
        }
    }
}

/// Per-character measurements gathered by the OCR engine alongside the raw
/// text. Box heights are listed in reading order, top line first, one value
/// per character position. Engines that do not segment characters leave
/// them out, which disables height-based correction only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineMetadata {
    pub box_heights: Option<Vec<f64>>,
}

/// Raw output of an OCR engine: the candidate MRZ text block plus whatever
/// metadata the engine could gather.
#[derive(Debug, Clone)]
pub struct RawMrz {
    pub text: String,
    pub metadata: EngineMetadata,
}

/// A shaped two-line TD3 record: both lines are exactly 44 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MrzRecord {
    pub line1: String,
    pub line2: String,
}

impl MrzRecord {
    /// Parses a corrected text block into a shaped record. A block that is
    /// not exactly two lines of 44 characters is invalid and carries no
    /// further checks.
    pub fn parse(text: &str) -> Result<MrzRecord, MrzError> {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() != 2 {
            return Err(MrzError::InvalidLineCount(lines.len()));
        }
        let len1 = lines[0].chars().count();
        let len2 = lines[1].chars().count();
        if len1 != MRZ_LINE_LEN || len2 != MRZ_LINE_LEN {
            return Err(MrzError::WrongLineLength(len1, len2));
        }
        Ok(MrzRecord {
            line1: lines[0].to_string(),
            line2: lines[1].to_string(),
        })
    }
}

/// Outcome of checking a record: valid or not, plus one reason per failing
/// sub-check. `reasons` is empty exactly when `is_valid` is true.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub is_valid: bool,
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shaped_record() {
        let line1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        let line2 = "L898902C36UTO7408122F1204159ZE184226B<<<<<10";
        let record = MrzRecord::parse(&format!("{}\n{}", line1, line2)).unwrap();
        assert_eq!(record.line1, line1);
        assert_eq!(record.line2, line2);
    }

    #[test]
    fn test_parse_rejects_wrong_line_count() {
        let err = MrzRecord::parse("P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<").unwrap_err();
        assert_eq!(err, MrzError::InvalidLineCount(1));
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let line1 = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        let line2 = "L898902C36UTO7408122F1204159ZE184226B<<<<<1";
        let err = MrzRecord::parse(&format!("{}\n{}", line1, line2)).unwrap_err();
        assert_eq!(err, MrzError::WrongLineLength(44, 43));
    }

    #[test]
    fn test_default_config_enables_all_passes() {
        let config = CorrectionConfig::default();
        assert!(config.use_height_correction);
        assert!(config.fix_line_lengths);
        assert!(config.apply_field_alphabets);
    }
}
