use serde::Serialize;

use crate::models::{CorrectionConfig, EngineMetadata, MrzRecord, Verdict};
use crate::processing::CorrectionPipeline;
use crate::utils::MrzError;
use crate::validation::PassportChecker;

/// What a full correction-and-verification run produces: the repaired
/// record and the checker's verdict on it.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    pub record: MrzRecord,
    pub verdict: Verdict,
}

/// Drives raw OCR output through the correction pipeline and the passport
/// checker. Holds no state besides its configuration; a single reader can
/// process any number of recognition attempts, concurrently if desired.
pub struct MrzReader {
    config: CorrectionConfig,
    ignore_first_line: bool,
}

impl MrzReader {
    pub fn new() -> Self {
        MrzReader {
            config: CorrectionConfig::default(),
            ignore_first_line: true,
        }
    }

    pub fn with_config(config: CorrectionConfig, ignore_first_line: bool) -> Self {
        MrzReader {
            config,
            ignore_first_line,
        }
    }

    /// Corrects the raw MRZ text and checks the result.
    ///
    /// Errors out when there is no text to work with or the lines cannot be
    /// brought into the 2x44 shape; every other problem lands as a reason
    /// on the verdict instead.
    pub fn process(
        &self,
        mrz_text: Option<&str>,
        metadata: &EngineMetadata,
    ) -> Result<ScanOutcome, MrzError> {
        let corrected = CorrectionPipeline::run(mrz_text, metadata, &self.config)?;
        let record = MrzRecord::parse(&corrected)?;

        let mut checker = PassportChecker::new(
            record.line1.clone(),
            record.line2.clone(),
            self.ignore_first_line,
        );
        let is_valid = checker.is_correct();
        let reasons = checker
            .get_reasons_failing()
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        Ok(ScanOutcome {
            record,
            verdict: Verdict { is_valid, reasons },
        })
    }
}

impl Default for MrzReader {
    fn default() -> Self {
        Self::new()
    }
}
