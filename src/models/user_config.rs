// ============================================================================
// Nitrokit - 用户级配置
// ============================================================================
//
// 文件: src/models/user_config.rs
// 职责: 跨项目保存的用户设置（如 Gemini API Key）
// 边界:
//   - ✅ 用户配置文件定位
//   - ✅ 用户配置读写
//   - ✅ 设置键解析
//   - ❌ 不应包含项目配置
//   - ❌ 不应包含网络请求
//
// ============================================================================

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// 用户配置目录名（位于 `~/.config` 下）
pub const USER_CONFIG_DIR: &str = "nitrokit-cli";

/// Gemini API Key 的环境变量
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// 用户配置内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(rename = "geminiApiKey", skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    /// 其他未识别的键，原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 可通过 `config set` 修改的设置键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    GeminiApiKey,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::GeminiApiKey => "gemini.apiKey",
        }
    }

    pub fn all() -> &'static [SettingKey] {
        &[SettingKey::GeminiApiKey]
    }

    /// 是否在显示时遮盖
    pub fn is_secret(&self) -> bool {
        matches!(self, SettingKey::GeminiApiKey)
    }
}

impl FromStr for SettingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown setting key: {}", s))
    }
}

/// 用户配置存储
pub struct UserConfigStore {
    path: PathBuf,
}

impl UserConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认位置：`~/.config/nitrokit-cli/config.json`
    pub fn default_location() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join(USER_CONFIG_DIR).join("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取配置；文件缺失时返回空配置，文件损坏时返回错误
    pub fn read(&self) -> Result<UserConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(UserConfig::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()))
            }
        };
        serde_json::from_str(&content)
            .with_context(|| format!("{} is not valid JSON", self.path.display()))
    }

    /// 读取配置；文件缺失或损坏时返回空配置
    pub fn load(&self) -> UserConfig {
        self.read().unwrap_or_else(|e| {
            debug!(path = %self.path.display(), error = %e, "ignoring unreadable user config");
            UserConfig::default()
        })
    }

    /// 写入配置
    pub fn save(&self, config: &UserConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let mut content = serde_json::to_string_pretty(config)?;
        content.push('\n');
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// 读取单个设置
    pub fn get(&self, key: SettingKey) -> Option<String> {
        let config = self.load();
        match key {
            SettingKey::GeminiApiKey => config.gemini_api_key,
        }
    }

    /// 修改单个设置；现有文件无法解析时不覆盖
    pub fn set(&self, key: SettingKey, value: &str) -> Result<()> {
        let mut config = self.read()?;
        match key {
            SettingKey::GeminiApiKey => config.gemini_api_key = Some(value.to_string()),
        }
        self.save(&config)
    }

    /// 解析 Gemini API Key：环境变量优先，其次用户配置
    pub fn resolve_gemini_api_key(&self) -> Option<String> {
        std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.get(SettingKey::GeminiApiKey))
    }
}

/// 遮盖敏感值，只保留末尾四位
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_round_trips_and_keeps_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let store = UserConfigStore::new(&path);
        store.set(SettingKey::GeminiApiKey, "secret-key").unwrap();

        assert_eq!(store.get(SettingKey::GeminiApiKey).as_deref(), Some("secret-key"));
        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw["geminiApiKey"], "secret-key");
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(UserConfigStore::new(&path).load(), UserConfig::default());
    }

    #[test]
    fn set_refuses_to_overwrite_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ \"theme\": ").unwrap();

        let store = UserConfigStore::new(&path);
        assert!(store.set(SettingKey::GeminiApiKey, "secret-key").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ \"theme\": ");
        assert_eq!(store.get(SettingKey::GeminiApiKey), None);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserConfigStore::new(dir.path().join("absent/config.json"));
        assert_eq!(store.read().unwrap(), UserConfig::default());
    }

    #[test]
    fn setting_keys_parse_by_dotted_name() {
        assert_eq!("gemini.apiKey".parse::<SettingKey>(), Ok(SettingKey::GeminiApiKey));
        assert!("gemini.key".parse::<SettingKey>().is_err());
    }

    #[test]
    fn secrets_are_masked() {
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
        assert_eq!(mask_secret("abc"), "***");
    }
}
