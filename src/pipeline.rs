//! Scan → deduplicate → synchronize, for one root directory.

use std::path::{
    Path,
    PathBuf,
};

use crate::analyzer::{
    KeySet,
    extract_trans_calls,
};
use crate::config::{
    SourceMatcher,
    SyncSettings,
};
use crate::dictionary::{
    DictionaryReport,
    WriteMode,
    sync_dictionaries,
};
use crate::error::SyncError;
use crate::scanner::SourceWalker;

/// Keys collected by one scan of the source tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub keys: KeySet,
    /// Number of files read
    pub scanned_files: usize,
    /// Files skipped because they were not valid UTF-8
    pub skipped_files: Vec<PathBuf>,
}

/// Outcome of a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub scan: ScanResult,
    pub dictionaries: Vec<DictionaryReport>,
    pub mode: WriteMode,
}

impl SyncReport {
    /// Total number of keys added across all dictionaries.
    #[must_use]
    pub fn added_count(&self) -> usize {
        self.dictionaries.iter().map(|d| d.added.len()).sum()
    }
}

/// Walks `root` and collects the unique keys of every `trans` call.
///
/// # Errors
/// - invalid exclude patterns
/// - walk, read or decode failure (decode only when `skipUndecodable` is off)
pub fn scan_keys(root: &Path, settings: &SyncSettings) -> Result<ScanResult, SyncError> {
    let matcher = SourceMatcher::new(root.to_path_buf(), settings)?;
    let mut walker = SourceWalker::new(matcher, settings.skip_undecodable);

    let mut keys = KeySet::new();
    let mut scanned_files = 0;
    for file in walker.by_ref() {
        let file = file?;
        scanned_files += 1;

        let before = keys.len();
        for call in extract_trans_calls(&file.text) {
            tracing::trace!(
                path = %file.path.display(),
                key = call.key,
                kind = ?call.kind,
                offset = call.offset,
                "Found trans call"
            );
            keys.insert(call.key);
        }
        tracing::debug!(path = %file.path.display(), new_keys = keys.len() - before, "Scanned file");
    }

    tracing::info!(root = %root.display(), files = scanned_files, keys = keys.len(), "Scan finished");

    Ok(ScanResult { keys, scanned_files, skipped_files: walker.skipped().to_vec() })
}

/// Runs the full pipeline against `root`.
///
/// Dictionaries live in `root/<dictionaryDir>`. A missing dictionary directory
/// is not an error; the report then lists no dictionaries.
///
/// # Errors
/// Any error from [`scan_keys`] or from loading/writing a dictionary. Dictionaries
/// written before the failure stay written.
pub fn run(root: &Path, settings: &SyncSettings, mode: WriteMode) -> Result<SyncReport, SyncError> {
    let scan = scan_keys(root, settings)?;

    let dictionary_dir = root.join(&settings.dictionary_dir);
    let dictionaries = sync_dictionaries(&dictionary_dir, &scan.keys, settings.indent, mode)?;

    let report = SyncReport { scan, dictionaries, mode };
    tracing::info!(
        dictionaries = report.dictionaries.len(),
        added = report.added_count(),
        ?mode,
        "Synchronization finished"
    );

    Ok(report)
}
