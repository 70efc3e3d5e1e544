//! Key extraction from source text and key deduplication.

pub mod extractor;
pub mod types;

pub use extractor::extract_trans_calls;
pub use types::{
    KeySet,
    TransCall,
    TransCallKind,
};
