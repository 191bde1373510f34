pub mod extractor;
pub mod intake;

pub use extractor::{FieldExtractor, RegexFieldExtractor};
pub use intake::IntakeService;
