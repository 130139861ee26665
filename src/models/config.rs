// ============================================================================
// Nitrokit - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 项目配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置默认值
//   - ✅ 配置文件读写操作
//   - ✅ 运行时参数合并
//   - ❌ 不应包含注册表编辑逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// 项目配置文件名
pub const CONFIG_FILE_NAME: &str = "nitrokit.toml";

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// Nitrokit 配置文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 项目布局配置
    #[serde(default)]
    pub project: ProjectConfig,
    /// 语言生成配置
    #[serde(default)]
    pub generate: GenerateConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 项目布局配置，路径均相对于项目根目录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// 项目根目录
    pub root: String,
    /// 语言注册表文件
    pub registry_file: String,
    /// 消息包根目录
    pub messages_dir: String,
    /// 类型引用文件
    pub type_references_file: String,
    /// 动态加载文件
    pub loader_file: String,
    /// 声明汇总文件
    pub declarations_file: String,
    /// 新语言复制消息包时的来源语言
    pub source_locale: String,
}

/// 语言生成配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// 遇到语言目录中不存在的代码时的处理方式
    #[serde(default)]
    pub unknown_code_policy: UnknownCodePolicy,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default = "Config::default_colored")]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default = "Config::default_language")]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub project_root: Option<String>,
    pub language: Option<String>,
    pub unknown_code_policy: Option<UnknownCodePolicy>,
}

/// 未知语言代码处理策略
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCodePolicy {
    /// 跳过并报告
    #[default]
    Skip,
    /// 整批失败
    Fail,
}

impl UnknownCodePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownCodePolicy::Skip => "skip",
            UnknownCodePolicy::Fail => "fail",
        }
    }
}

impl std::str::FromStr for UnknownCodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skip" => Ok(UnknownCodePolicy::Skip),
            "fail" => Ok(UnknownCodePolicy::Fail),
            _ => Err(format!("unsupported unknown_code_policy: {}, expected skip or fail", s)),
        }
    }
}

impl std::fmt::Display for UnknownCodePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    fn default_project_root() -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    fn default_registry_file() -> String {
        "src/constants/locale.ts".to_string()
    }

    fn default_messages_dir() -> String {
        "messages".to_string()
    }

    fn default_type_references_file() -> String {
        "src/types/global.d.ts".to_string()
    }

    fn default_loader_file() -> String {
        "src/lib/i18n/request.ts".to_string()
    }

    fn default_declarations_file() -> String {
        "messages/declarations.d.json".to_string()
    }

    fn default_source_locale() -> String {
        "en".to_string()
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }

    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize(project_root: &Path) -> anyhow::Result<()> {
        let config = Self::load_from(&project_root.join(CONFIG_FILE_NAME))?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件，不存在时使用默认配置
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.apply(args);
        Ok(())
    }

    /// 用运行时参数覆盖配置
    pub fn apply(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        if let Some(project_root) = args.project_root {
            self.project.root = project_root;
        }
        if let Some(language) = args.language {
            self.i18n.language = language;
        }
        if let Some(policy) = args.unknown_code_policy {
            self.generate.unknown_code_policy = policy;
        }
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &Path) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// 读取全局配置快照
    fn snapshot() -> anyhow::Result<Config> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.clone())
    }

    /// 获取项目根目录（带默认值）
    pub fn get_project_root() -> PathBuf {
        match Self::snapshot() {
            Ok(config) => config.project.root_path(),
            _ => Self::default_project_root(),
        }
    }

    /// 获取项目布局配置（带默认值）
    pub fn get_project_config() -> ProjectConfig {
        Self::snapshot()
            .map(|config| config.project)
            .unwrap_or_default()
    }

    /// 获取未知语言代码处理策略
    pub fn get_unknown_code_policy() -> UnknownCodePolicy {
        Self::snapshot()
            .map(|config| config.generate.unknown_code_policy)
            .unwrap_or_default()
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Ok(Self::snapshot()?.i18n.language)
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        match Self::snapshot() {
            Ok(config) => config.output.verbose,
            _ => Self::default_verbose(),
        }
    }

    /// 获取是否彩色输出
    pub fn get_colored() -> bool {
        match Self::snapshot() {
            Ok(config) => config.output.colored,
            _ => Self::default_colored(),
        }
    }
}

impl ProjectConfig {
    /// 解析项目根目录，"." 表示当前目录
    pub fn root_path(&self) -> PathBuf {
        if self.root.is_empty() || self.root == "." {
            Config::default_project_root()
        } else {
            PathBuf::from(&self.root)
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            registry_file: Config::default_registry_file(),
            messages_dir: Config::default_messages_dir(),
            type_references_file: Config::default_type_references_file(),
            loader_file: Config::default_loader_file(),
            declarations_file: Config::default_declarations_file(),
            source_locale: Config::default_source_locale(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.project.registry_file, "src/constants/locale.ts");
        assert_eq!(config.project.source_locale, "en");
        assert_eq!(config.generate.unknown_code_policy, UnknownCodePolicy::Skip);
        assert!(config.output.colored);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "[project]\nsource_locale = \"tr\"\n\n[generate]\nunknown_code_policy = \"fail\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.project.source_locale, "tr");
        assert_eq!(config.project.messages_dir, "messages");
        assert_eq!(config.generate.unknown_code_policy, UnknownCodePolicy::Fail);
        assert_eq!(config.i18n.language, "en_us");
    }

    #[test]
    fn saved_template_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        Config::create_default_config_file(&path).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.project.loader_file, "src/lib/i18n/request.ts");
    }

    #[test]
    fn runtime_args_override_file_values() {
        let mut config = Config::default();
        config.apply(RuntimeArgs {
            verbose: Some(true),
            colored: Some(false),
            unknown_code_policy: Some(UnknownCodePolicy::Fail),
            ..Default::default()
        });
        assert!(config.output.verbose);
        assert!(!config.output.colored);
        assert_eq!(config.generate.unknown_code_policy, UnknownCodePolicy::Fail);
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("FAIL".parse::<UnknownCodePolicy>(), Ok(UnknownCodePolicy::Fail));
        assert!("abort".parse::<UnknownCodePolicy>().is_err());
    }
}
