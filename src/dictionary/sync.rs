//! 翻訳辞書ディレクトリの同期

use std::path::{
    Path,
    PathBuf,
};

use crate::analyzer::KeySet;
use crate::dictionary::file::Dictionary;
use crate::dictionary::types::{
    DictionaryReport,
    WriteMode,
};
use crate::error::SyncError;

/// 辞書ディレクトリ直下の辞書ファイルを列挙する
///
/// - ディレクトリが存在しない場合は空（エラーではない）
/// - `.` で始まるエントリは対象外
/// - サブディレクトリは対象外（シンボリックリンクは辿って判定）
///
/// 結果はファイル名の昇順。
///
/// # Errors
/// - ディレクトリの読み込みエラー
pub fn find_dictionaries(dictionary_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
    if !dictionary_dir.is_dir() {
        tracing::debug!(dir = %dictionary_dir.display(), "Dictionary directory not found");
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    let entries =
        std::fs::read_dir(dictionary_dir).map_err(|e| SyncError::io(dictionary_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SyncError::io(dictionary_dir, e))?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            tracing::debug!(path = %path.display(), "Skipping hidden entry");
            continue;
        }

        if path.is_dir() {
            tracing::debug!(path = %path.display(), "Skipping subdirectory");
            continue;
        }

        found.push(path);
    }

    found.sort();
    Ok(found)
}

/// 一つの辞書ファイルにキーを反映する
///
/// 追加するキーがなくても、`WriteMode::Write` なら必ず書き直す。
pub fn sync_dictionary(
    path: &Path,
    keys: &KeySet,
    indent: usize,
    mode: WriteMode,
) -> Result<DictionaryReport, SyncError> {
    let mut dictionary = Dictionary::load(path)?;
    let added = dictionary.merge_keys(keys);

    if mode == WriteMode::Write {
        dictionary.write(indent)?;
    }

    tracing::debug!(
        path = %path.display(),
        added = added.len(),
        total = dictionary.len(),
        ?mode,
        "Synchronized dictionary"
    );

    Ok(DictionaryReport {
        path: path.to_path_buf(),
        language: dictionary.language(),
        added,
        total: dictionary.len(),
    })
}

/// 辞書ディレクトリ内の全ての辞書ファイルにキーを反映する
///
/// 途中でエラーが発生した場合は即座に中断する。それまでに書き直したファイルは
/// 元に戻らない。
pub fn sync_dictionaries(
    dictionary_dir: &Path,
    keys: &KeySet,
    indent: usize,
    mode: WriteMode,
) -> Result<Vec<DictionaryReport>, SyncError> {
    find_dictionaries(dictionary_dir)?
        .iter()
        .map(|path| sync_dictionary(path, keys, indent, mode))
        .collect()
}
