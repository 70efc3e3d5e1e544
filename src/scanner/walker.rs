//! ソースツリーの走査
use std::fmt;
use std::path::PathBuf;

use ignore::{
    DirEntry,
    Walk,
    WalkBuilder,
};

use crate::config::SourceMatcher;
use crate::error::SyncError;
use crate::scanner::types::SourceFile;

/// ソースファイルを一つずつ読み込むイテレータ
///
/// ルート以下の通常ファイルを全て返す。除外ディレクトリ名に一致するディレクトリは
/// どの深さでも降りない。隠しファイルや `.gitignore` の対象も読み込む。
pub struct SourceWalker {
    /// 下位の走査
    walk: Walk,
    /// 除外判定
    matcher: SourceMatcher,
    /// UTF-8 でないファイルを警告してスキップするか
    skip_undecodable: bool,
    /// スキップしたファイル
    skipped: Vec<PathBuf>,
}

impl SourceWalker {
    /// 新しい走査を作成
    #[must_use]
    pub fn new(matcher: SourceMatcher, skip_undecodable: bool) -> Self {
        let prune = matcher.clone();
        let walk = WalkBuilder::new(matcher.root())
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_pruned_dir(&prune, entry))
            .build();

        Self { walk, matcher, skip_undecodable, skipped: Vec::new() }
    }

    /// UTF-8 として読めずにスキップしたファイル
    #[must_use]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    /// エントリを読み込む。スキップする場合は `Ok(None)`
    fn read_entry(&mut self, entry: &DirEntry) -> Result<Option<SourceFile>, SyncError> {
        let path = entry.path();

        if !is_regular_file(entry)? {
            return Ok(None);
        }

        if self.matcher.is_excluded_file(path) {
            tracing::debug!(path = %path.display(), "Excluded by pattern");
            return Ok(None);
        }

        let bytes = std::fs::read(path).map_err(|e| SyncError::io(path, e))?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Some(SourceFile { path: path.to_path_buf(), text })),
            Err(source) if self.skip_undecodable => {
                tracing::warn!(path = %path.display(), error = %source, "Skipping undecodable file");
                self.skipped.push(path.to_path_buf());
                Ok(None)
            }
            Err(source) => Err(SyncError::Decode { path: path.to_path_buf(), source }),
        }
    }
}

impl fmt::Debug for SourceWalker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceWalker")
            .field("root", &self.matcher.root())
            .field("skip_undecodable", &self.skip_undecodable)
            .field("skipped", &self.skipped)
            .finish_non_exhaustive()
    }
}

impl Iterator for SourceWalker {
    type Item = Result<SourceFile, SyncError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(SyncError::Walk(err))),
            };

            match self.read_entry(&entry) {
                Ok(Some(file)) => return Some(Ok(file)),
                Ok(None) => {}
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// 降りてはいけないディレクトリか（ルート自体は対象外）
fn is_pruned_dir(matcher: &SourceMatcher, entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && matcher.is_excluded_dir_name(entry.file_name())
}

/// 通常ファイル、またはファイルを指すシンボリックリンク
///
/// リンク先が存在しないシンボリックリンクは読み込みエラーとする。
fn is_regular_file(entry: &DirEntry) -> Result<bool, SyncError> {
    match entry.file_type() {
        Some(ft) if ft.is_file() => Ok(true),
        Some(ft) if ft.is_symlink() => std::fs::metadata(entry.path())
            .map(|metadata| metadata.is_file())
            .map_err(|e| SyncError::io(entry.path(), e)),
        _ => Ok(false),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;
    use std::path::Path;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::SyncSettings;
    use crate::test_utils::write_file;

    fn walker(root: &Path, settings: &SyncSettings) -> SourceWalker {
        let matcher = SourceMatcher::new(root.to_path_buf(), settings).unwrap();
        SourceWalker::new(matcher, settings.skip_undecodable)
    }

    fn relative_paths(root: &Path, walker: SourceWalker) -> Vec<String> {
        walker
            .map(|file| {
                let file = file.unwrap();
                file.path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
            })
            .collect()
    }

    #[rstest]
    fn yields_every_file_with_contents() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "main.go", "package main");
        write_file(root, "app/views/index.html", "<p>hi</p>");

        let files: Vec<SourceFile> = walker(root, &SyncSettings::default())
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert_that!(files, len(eq(2)));
        let index = files.iter().find(|f| f.path.ends_with("index.html")).unwrap();
        assert_eq!(index.text, "<p>hi</p>");
    }

    #[rstest]
    fn prunes_langs_directories_at_any_depth() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "main.go", "");
        write_file(root, "langs/en", "{}");
        write_file(root, "app/langs/fr", "{}");
        write_file(root, "app/langs.go", "");

        let paths = relative_paths(root, walker(root, &SyncSettings::default()));

        assert_that!(paths, unordered_elements_are![eq("main.go"), eq("app/langs.go")]);
    }

    #[rstest]
    fn includes_hidden_and_ignored_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, ".gitignore", "build/\n");
        write_file(root, "build/out.go", "");
        write_file(root, ".hidden/tmpl.html", "");

        let paths = relative_paths(root, walker(root, &SyncSettings::default()));

        assert_that!(
            paths,
            unordered_elements_are![eq(".gitignore"), eq("build/out.go"), eq(".hidden/tmpl.html")]
        );
    }

    #[rstest]
    fn skips_files_matching_exclude_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_file(root, "main.go", "");
        write_file(root, "vendor/lib/a.go", "");
        let settings = SyncSettings {
            exclude_patterns: vec!["vendor/**".to_string()],
            ..SyncSettings::default()
        };

        let paths = relative_paths(root, walker(root, &settings));

        assert_that!(paths, elements_are![eq("main.go")]);
    }

    #[rstest]
    fn undecodable_file_fails_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("logo.png"), [0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe]).unwrap();

        let result: std::result::Result<Vec<SourceFile>, SyncError> =
            walker(root, &SyncSettings::default()).collect();

        assert!(matches!(result, Err(SyncError::Decode { .. })));
    }

    #[rstest]
    fn undecodable_file_is_skipped_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("logo.png"), [0xff, 0xfe, 0x00]).unwrap();
        write_file(root, "main.go", "");
        let settings = SyncSettings { skip_undecodable: true, ..SyncSettings::default() };

        let mut walker = walker(root, &settings);
        let files: Vec<SourceFile> = walker.by_ref().collect::<std::result::Result<_, _>>().unwrap();

        assert_that!(files, len(eq(1)));
        assert_eq!(walker.skipped().len(), 1);
        assert!(walker.skipped()[0].ends_with("logo.png"));
    }

    #[cfg(unix)]
    #[rstest]
    fn follows_file_symlinks_but_not_directory_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let target = write_file(root, "real/main.go", "");
        std::os::unix::fs::symlink(&target, root.join("link.go")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("linked_dir")).unwrap();

        let paths = relative_paths(root, walker(root, &SyncSettings::default()));

        assert_that!(paths, unordered_elements_are![eq("link.go"), eq("real/main.go")]);
    }

    #[cfg(unix)]
    #[rstest]
    fn dangling_symlink_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        std::os::unix::fs::symlink(root.join("gone.go"), root.join("broken.go")).unwrap();

        let result: std::result::Result<Vec<SourceFile>, SyncError> =
            walker(root, &SyncSettings::default()).collect();

        assert!(matches!(result, Err(SyncError::Io { ref path, .. }) if path.ends_with("broken.go")));
    }

    #[rstest]
    fn missing_root_is_a_walk_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("missing");

        let result: std::result::Result<Vec<SourceFile>, SyncError> =
            walker(&root, &SyncSettings::default()).collect();

        assert!(matches!(result, Err(SyncError::Walk(_))));
    }
}
