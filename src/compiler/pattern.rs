//! 编译后匹配器模型
//! 每条规则编译为一个带 System / Version 两个命名分组的正则

use regex::{Captures, Regex};

use crate::rule::model::{ClientKind, Version};

/// System 分组名：命中的分类标识
pub const SYSTEM_GROUP: &str = "System";
/// Version 分组名：紧随其后的版本数字串
pub const VERSION_GROUP: &str = "Version";

/// 通用版本尾缀：跳过非数字/非 `_`/非 `.` 字符，再捕获至多四段以 `.` 或 `_` 分隔的数字
pub const VERSION_SUFFIX: &str = r"[^0-9_.]*(?P<Version>[0-9]*[._]?[0-9]*[._]?[0-9]*[._]?[0-9]*)";

/// 由规则源文本拼接完整匹配正则（规则源文本不转义）
pub fn matcher_source(rule_source: &str) -> String {
    format!("(?P<{}>{}){}", SYSTEM_GROUP, rule_source, VERSION_SUFFIX)
}

/// 单条编译后的规则
#[derive(Debug, Clone)]
pub struct CompiledMatcher<K: ClientKind> {
    pub kind: K,
    pub regex: Regex,
}

impl<K: ClientKind> CompiledMatcher<K> {
    /// 任意位置匹配，返回捕获结果
    pub fn captures<'a>(&'a self, input: &'a str) -> Option<Captures<'a>> {
        self.regex.captures(input)
    }

    /// System 分组命中时返回版本；Version 分组未命中时为全 0
    pub fn match_version(&self, input: &str) -> Option<Version> {
        let captures = self.captures(input)?;
        captures.name(SYSTEM_GROUP)?;

        Some(
            captures
                .name(VERSION_GROUP)
                .map(|m| Version::parse(m.as_str()))
                .unwrap_or(Version::ZERO),
        )
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        self.regex.as_str()
    }
}

/// 某一分类轴编译后的有序匹配器集合，顺序与规则表一致
#[derive(Debug, Clone)]
pub struct CompiledCategory<K: ClientKind> {
    matchers: Vec<CompiledMatcher<K>>,
}

impl<K: ClientKind> Default for CompiledCategory<K> {
    fn default() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }
}

impl<K: ClientKind> CompiledCategory<K> {
    pub fn new(matchers: Vec<CompiledMatcher<K>>) -> Self {
        Self { matchers }
    }

    /// 按优先级顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &CompiledMatcher<K>> {
        self.matchers.iter()
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// 首个命中的规则胜出，返回命中的匹配器及其版本
    pub fn first_match(&self, input: &str) -> Option<(&CompiledMatcher<K>, Version)> {
        self.matchers
            .iter()
            .find_map(|matcher| matcher.match_version(input).map(|v| (matcher, v)))
    }

    /// 分类值的当前优先级次序
    pub fn kinds(&self) -> Vec<K> {
        self.matchers.iter().map(|m| m.kind).collect()
    }
}
