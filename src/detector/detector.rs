//! User-Agent detector core
//! 客户端识别器核心：持有系统/浏览器两个匹配器缓存，输出 (系统, 浏览器) 识别结果
//!
//! 两个分类轴的查找彼此独立，互不影响；相同规则表与相同输入下结果恒定。

use std::sync::Arc;

use tracing::debug;

use super::analyzer::CategoryAnalyzer;
use crate::compiler::MatcherCache;
use crate::config::DetectorConfig;
use crate::rule::model::{
    ClientBrowser, ClientBrowserType, ClientSystem, ClientSystemType, UserClient,
};

/// 客户端识别器
/// 缓存以 Arc 注入，克隆后的识别器共享同一份缓存，只会构建一次
#[derive(Debug, Clone)]
pub struct UaDetector {
    systems: Arc<MatcherCache<ClientSystemType>>,
    browsers: Arc<MatcherCache<ClientBrowserType>>,
    config: DetectorConfig,
}

impl Default for UaDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl UaDetector {
    /// 基于内置规则表创建识别器（缓存懒构建，首次识别时编译）
    pub fn new(config: DetectorConfig) -> Self {
        let systems = Arc::new(MatcherCache::builtin(&config));
        let browsers = Arc::new(MatcherCache::builtin(&config));
        Self::with_caches(systems, browsers, config)
    }

    /// 注入外部缓存创建识别器
    pub fn with_caches(
        systems: Arc<MatcherCache<ClientSystemType>>,
        browsers: Arc<MatcherCache<ClientBrowserType>>,
        config: DetectorConfig,
    ) -> Self {
        Self {
            systems,
            browsers,
            config,
        }
    }

    /// 识别 User-Agent
    /// 空串直接返回 Unknown/Unknown，不触碰缓存与锁
    pub fn detect(&self, user_agent: &str) -> UserClient {
        if user_agent.is_empty() {
            return UserClient::unknown();
        }

        let user_agent = self.clip(user_agent);
        let client = UserClient::new(self.detect_system(user_agent), self.detect_browser(user_agent));

        if self.config.verbose {
            debug!("UA detected: {} <- {:?}", client, user_agent);
        }
        client
    }

    /// 可空输入版本，`None` 与空串同样短路
    pub fn detect_opt(&self, user_agent: Option<&str>) -> UserClient {
        match user_agent {
            Some(user_agent) => self.detect(user_agent),
            None => UserClient::unknown(),
        }
    }

    /// 批量识别，结果顺序与输入一致
    pub fn detect_batch<S: AsRef<str>>(&self, user_agents: &[S]) -> Vec<UserClient> {
        user_agents
            .iter()
            .map(|user_agent| self.detect(user_agent.as_ref()))
            .collect()
    }

    /// 仅识别操作系统
    pub fn detect_system(&self, user_agent: &str) -> ClientSystem {
        if user_agent.is_empty() {
            return ClientSystem::default();
        }
        let (kind, version) = CategoryAnalyzer::analyze(&self.systems, self.clip(user_agent));
        ClientSystem::new(kind, version)
    }

    /// 仅识别浏览器
    pub fn detect_browser(&self, user_agent: &str) -> ClientBrowser {
        if user_agent.is_empty() {
            return ClientBrowser::default();
        }
        let (kind, version) = CategoryAnalyzer::analyze(&self.browsers, self.clip(user_agent));
        ClientBrowser::new(kind, version)
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn system_cache(&self) -> &Arc<MatcherCache<ClientSystemType>> {
        &self.systems
    }

    pub fn browser_cache(&self) -> &Arc<MatcherCache<ClientBrowserType>> {
        &self.browsers
    }

    /// 按配置截断超长输入（向前对齐到字符边界）
    fn clip<'a>(&self, user_agent: &'a str) -> &'a str {
        let Some(max_len) = self.config.max_user_agent_len else {
            return user_agent;
        };
        if user_agent.len() <= max_len {
            return user_agent;
        }

        let mut end = max_len;
        while !user_agent.is_char_boundary(end) {
            end -= 1;
        }
        &user_agent[..end]
    }
}
