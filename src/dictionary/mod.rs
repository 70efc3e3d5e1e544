//! Per-language JSON dictionaries.

pub mod file;
pub mod sync;
pub mod types;

pub use file::Dictionary;
pub use sync::{
    find_dictionaries,
    sync_dictionaries,
    sync_dictionary,
};
pub use types::{
    DictionaryReport,
    WriteMode,
};
