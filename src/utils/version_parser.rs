//! 版本解析工具模块
//! 将正则 Version 分组捕获到的数字串（如 `10.4_2`）规整为四段式版本号
//! 以 `.` 或 `_` 分隔，取前四段；缺失段、无法解析的段、负数段均记为 0，第五段起忽略

use crate::rule::model::Version;

/// 解析版本文本，`None` 或空串返回全 0 版本
pub fn parse_version(text: Option<&str>) -> Version {
    match text {
        Some(text) => Version::parse(text),
        None => Version::ZERO,
    }
}

impl Version {
    /// 从自由格式文本解析版本号，永不失败
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::ZERO;
        }

        let mut parts = [0i32; 4];
        for (slot, segment) in parts.iter_mut().zip(text.split(['.', '_'])) {
            *slot = segment.trim().parse::<i32>().unwrap_or(0).max(0);
        }

        Self::new(parts[0], parts[1], parts[2], parts[3])
    }
}
