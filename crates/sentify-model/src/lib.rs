pub mod error;
pub mod language;
pub mod sentences;
pub mod sheet;

pub use error::{Result, SentifyError};
pub use language::Language;
pub use sentences::{OutputFormat, SentenceGroups, SheetSentences, VersionMap};
pub use sheet::{ChunkRange, SheetTable};
