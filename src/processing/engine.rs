use crate::models::RawMrz;

/// Contract for the OCR engines capable of doing the main recognition task.
///
/// The correction and verification core only consumes the candidate text
/// block and the optional per-character metadata; which engine produced it
/// and what its image type looks like is the implementor's business. An
/// engine is an explicitly constructed handle owned by the caller, not a
/// process-wide singleton, so expensive resources (a loaded model, a reader
/// instance) live exactly as long as the handle does.
pub trait OcrEngine {
    type Image;

    /// Produces the raw MRZ text for an image, or `None` when the engine
    /// could not recognize anything usable. `preprocessed` carries the
    /// thresholded variant when the preprocessing stage ran.
    fn get_raw_mrz_text(
        &mut self,
        original: &Self::Image,
        preprocessed: Option<&Self::Image>,
    ) -> Option<RawMrz>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EngineMetadata;
    use crate::MrzReader;

    /// Stand-in for a real engine: "recognizes" whatever text the test
    /// hands it as the image.
    struct CannedEngine;

    impl OcrEngine for CannedEngine {
        type Image = String;

        fn get_raw_mrz_text(
            &mut self,
            original: &String,
            _preprocessed: Option<&String>,
        ) -> Option<RawMrz> {
            if original.is_empty() {
                return None;
            }
            Some(RawMrz {
                text: original.clone(),
                metadata: EngineMetadata::default(),
            })
        }
    }

    #[test]
    fn test_engine_output_feeds_the_reader() {
        let image = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                     L898902C36UTO7408122F1204159ZE184226B<<<<<10"
            .to_string();
        let mut engine = CannedEngine;
        let raw = engine.get_raw_mrz_text(&image, None).unwrap();

        let outcome = MrzReader::new()
            .process(Some(&raw.text), &raw.metadata)
            .unwrap();
        assert!(outcome.verdict.is_valid);
    }

    #[test]
    fn test_engine_failure_leaves_nothing_to_process() {
        let mut engine = CannedEngine;
        assert!(engine.get_raw_mrz_text(&String::new(), None).is_none());
    }
}
