//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

/// テスト用のファイルを作成する
///
/// 親ディレクトリが存在しない場合は作成する。
///
/// # Arguments
/// * `root` - ルートディレクトリ
/// * `relative_path` - ルートからの相対パス（例: "app/views/index.html"）
/// * `contents` - ファイルの内容
///
/// # Returns
/// 作成したファイルのパス
pub(crate) fn write_file(root: &Path, relative_path: &str, contents: &str) -> PathBuf {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// テスト用のファイルを読み込む
pub(crate) fn read_file(root: &Path, relative_path: &str) -> String {
    fs::read_to_string(root.join(relative_path)).unwrap()
}
