//! 检测器配置管理,存储所有可配置项

/// 检测器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    // 规则正则是否忽略大小写
    pub case_insensitive: bool,
    // User-Agent 最大参与匹配长度（None 表示不截断）
    pub max_user_agent_len: Option<usize>,
    // 是否输出逐条检测日志
    pub verbose: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            max_user_agent_len: None,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> DetectorConfig {
        DetectorConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: DetectorConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    pub fn case_insensitive(mut self, enabled: bool) -> Self {
        self.config.case_insensitive = enabled;
        self
    }

    pub fn max_user_agent_len(mut self, max_len: usize) -> Self {
        self.config.max_user_agent_len = Some(max_len);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> DetectorConfig {
        self.config
    }
}
