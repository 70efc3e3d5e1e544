//! trans-key-sync
//!
//! ソースツリーから `trans` 呼び出しのキーを集め、言語ごとの JSON 辞書ファイルに反映する

pub mod analyzer;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod pipeline;
pub mod scanner;
mod test_utils;

pub use error::SyncError;
pub use pipeline::{
    ScanResult,
    SyncReport,
    run,
    scan_keys,
};
