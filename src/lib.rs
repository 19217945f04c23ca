//! rsuaclient - Rust User-Agent 客户端识别库
//! 基于有序规则表识别操作系统族与浏览器族及其版本，匹配器按分类懒加载、进程内仅构建一次

// 导出全局错误类型
pub use self::error::{UaClientError, UaResult};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, DetectorConfig};

// 导出规则模块核心接口
pub use self::rule::{
    BROWSER_RULES, BuiltinRules, ClientBrowser, ClientBrowserType, ClientKind, ClientSystem,
    ClientSystemType, ENCODED_LEN, MOBILE_SYSTEMS, RuleEntry, RuleTable, SYSTEM_RULES, UserClient,
    Version, is_mobile_device,
};

// 导出同步原语
pub use self::sync::SharedLock;

// 导出工具模块核心接口
pub use self::utils::parse_version;

// 导出编译模块核心接口
pub use self::compiler::{CategoryGuard, CompiledCategory, CompiledMatcher, MatcherCache, RuleCompiler};

// 导出识别模块核心接口
pub use self::detector::{CategoryAnalyzer, UaDetector, detect_user_agent, global_detector};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod sync;
pub mod utils;
pub mod compiler;
pub mod detector;
