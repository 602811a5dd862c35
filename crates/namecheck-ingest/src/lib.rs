pub mod decode;
pub mod defaults;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod master;

pub use decode::{decode_bytes, read_text};
pub use defaults::DEFAULT_MASTER_NAMES;
pub use discovery::{discover_documents, expand_inputs};
pub use error::{IngestError, Result};
pub use extract::{
    CsvExtractor, Extractor, FileExtractor, SUPPORTED_EXTENSIONS, TextExtractor, extension_of,
    is_supported,
};
pub use master::{
    MIN_MASTER_NAMES, MasterLoad, MasterSource, default_master_names, load_master_names,
    read_master_file, sanitize_master_names,
};
