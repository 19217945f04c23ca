//! 工具模块
pub mod version_parser;

pub use self::version_parser::parse_version;
