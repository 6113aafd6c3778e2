pub mod engine;
pub mod field_correction;
pub mod height_correction;
pub mod line_lengths;
pub mod postprocess;

pub use engine::OcrEngine;
pub use postprocess::CorrectionPipeline;
