pub mod data;
pub mod fields;

pub use data::{CorrectionConfig, EngineMetadata, MrzRecord, RawMrz, Verdict};
pub use fields::{Alphabet, FieldSpec, FILLER, MRZ_LINE_LEN, PASSPORT_FIELDS};
