//! 识别模块：User-Agent 客户端识别核心逻辑
pub mod global;
pub mod analyzer;
pub mod detector;

// 导出核心接口
pub use self::global::{detect_user_agent, global_detector};
pub use self::analyzer::CategoryAnalyzer;
pub use self::detector::UaDetector;
