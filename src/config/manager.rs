//! 設定管理を行うモジュール

use std::path::Path;

use super::{
    ConfigError,
    SyncSettings,
};

/// ルートディレクトリに置く設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".trans-key-sync.json";

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: SyncSettings,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SyncSettings::default() }
    }

    /// ルートの `.trans-key-sync.json` から設定を読み込む
    ///
    /// ファイルがなければデフォルト値。失敗した場合、現在の設定は変わらない。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, root: &Path) -> Result<(), ConfigError> {
        let config_path = root.join(CONFIG_FILE_NAME);

        let settings: SyncSettings = if config_path.is_file() {
            tracing::debug!("Loading configuration from: {:?}", config_path);
            serde_json::from_str(&std::fs::read_to_string(&config_path)?)?
        } else {
            tracing::debug!("Configuration file not found: {:?}", config_path);
            SyncSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を差し替える
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: SyncSettings) -> Result<(), ConfigError> {
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;
        self.current_settings = new_settings;

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &SyncSettings {
        &self.current_settings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    fn write_config(root: &Path, contents: &str) {
        fs::write(root.join(CONFIG_FILE_NAME), contents).unwrap();
    }

    /// new: デフォルト値で作成される
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings(), &SyncSettings::default());
    }

    /// `load_settings`: 設定ファイルがある場合
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        write_config(temp_dir.path(), r#"{"indent": 4, "dictionaryDir": "i18n"}"#);

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path());

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().indent, 4);
        assert_eq!(manager.get_settings().dictionary_dir, "i18n");
    }

    /// `load_settings`: 設定ファイルがない場合はデフォルト値
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path());

        assert!(result.is_ok());
        assert_eq!(manager.get_settings(), &SyncSettings::default());
    }

    /// `load_settings`: 設定ファイルと同名のディレクトリは無視する
    #[rstest]
    fn test_load_settings_config_path_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let mut manager = ConfigManager::new();

        assert!(manager.load_settings(temp_dir.path()).is_ok());
        assert_eq!(manager.get_settings(), &SyncSettings::default());
    }

    /// `load_settings`: JSON パースエラー
    #[rstest]
    #[case::invalid_json("invalid json")]
    #[case::wrong_type(r#"{"indent": "two"}"#)]
    fn test_load_settings_parse_error(#[case] contents: &str) {
        let temp_dir = TempDir::new().unwrap();
        write_config(temp_dir.path(), contents);

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
        assert_eq!(manager.get_settings(), &SyncSettings::default());
    }

    /// `load_settings`: バリデーションエラーの場合は設定を更新しない
    #[rstest]
    fn test_load_settings_invalid_keeps_previous() {
        let temp_dir = TempDir::new().unwrap();
        write_config(temp_dir.path(), r#"{"dictionaryDir": ""}"#);

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings().dictionary_dir, "langs");
    }

    /// `update_settings`: 有効な設定で更新成功
    #[rstest]
    fn test_update_settings_valid() {
        let mut manager = ConfigManager::new();
        let new_settings = SyncSettings { skip_undecodable: true, ..SyncSettings::default() };

        let result = manager.update_settings(new_settings);

        assert!(result.is_ok());
        assert!(manager.get_settings().skip_undecodable);
    }

    /// `update_settings`: 無効な設定でエラー
    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let new_settings = SyncSettings { indent: 100, ..SyncSettings::default() };

        let result = manager.update_settings(new_settings);

        assert!(result.is_err());
        assert_eq!(manager.get_settings().indent, 1);
    }
}
