//! 全局识别器单例管理
//! 进程内默认识别器，仅作便捷入口；需要自定义配置或隔离缓存时直接构造 `UaDetector`

use once_cell::sync::Lazy;

use super::detector::UaDetector;
use crate::config::ConfigManager;
use crate::rule::model::UserClient;

/// 全局识别器实例（默认配置，首次访问时创建，匹配器在首次识别时编译）
static GLOBAL_DETECTOR: Lazy<UaDetector> = Lazy::new(|| UaDetector::new(ConfigManager::get_default()));

/// 获取全局识别器
pub fn global_detector() -> &'static UaDetector {
    &GLOBAL_DETECTOR
}

/// 使用全局识别器识别 User-Agent
pub fn detect_user_agent(user_agent: &str) -> UserClient {
    GLOBAL_DETECTOR.detect(user_agent)
}
