// Postprocessing of engine-produced MRZ text: swap characters that are
// easily confused and make sure the lines are of the correct length.

use log::{debug, warn};

use crate::models::{CorrectionConfig, EngineMetadata};
use crate::processing::field_correction::replace_based_on_mrz_fields;
use crate::processing::height_correction::replace_based_on_box_heights;
use crate::processing::line_lengths::fix_line_lengths;
use crate::utils::MrzError;

/// Orchestrates the correction passes in their fixed order: height-based
/// correction, line-length repair, field-alphabet correction. Each pass is
/// gated by the configuration; only line-length repair can fail.
pub struct CorrectionPipeline;

impl CorrectionPipeline {
    /// Corrects the raw MRZ text produced by an OCR engine. Should be
    /// called on the output of [`OcrEngine::get_raw_mrz_text`], with the
    /// metadata gathered by the engine.
    ///
    /// Returns the corrected two-line text block, or `None` when no text
    /// was obtained upstream or the lines cannot be brought into the 2x44
    /// shape.
    ///
    /// [`OcrEngine::get_raw_mrz_text`]: crate::processing::OcrEngine::get_raw_mrz_text
    pub fn correct(
        mrz_text: Option<&str>,
        metadata: &EngineMetadata,
        config: &CorrectionConfig,
    ) -> Option<String> {
        match Self::run(mrz_text, metadata, config) {
            Ok(text) => Some(text),
            Err(err) => {
                warn!("MRZ correction failed: {}", err);
                None
            }
        }
    }

    /// Like [`correct`](Self::correct), but reports why the pipeline gave
    /// up instead of swallowing the failure.
    pub fn run(
        mrz_text: Option<&str>,
        metadata: &EngineMetadata,
        config: &CorrectionConfig,
    ) -> Result<String, MrzError> {
        let mut text = mrz_text.ok_or(MrzError::NoInput)?.to_string();

        // Height correction must run before line-length repair so the box
        // heights still line up with the characters they were measured on.
        if config.use_height_correction {
            match &metadata.box_heights {
                None => debug!("No box heights available"),
                Some(box_heights) => {
                    text = replace_based_on_box_heights(&text, box_heights);
                    debug!("MRZ text after looking at box heights:\n{}", text);
                }
            }
        }

        if config.fix_line_lengths {
            text = fix_line_lengths(&text)?;
            debug!("MRZ text after looking at line lengths:\n{}", text);
        }

        if config.apply_field_alphabets {
            text = replace_based_on_mrz_fields(&text);
            debug!("MRZ text after looking at MRZ fields:\n{}", text);
        }

        Ok(text)
    }
}
