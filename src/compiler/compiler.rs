//! 规则编译器核心
//! 仅负责将有序规则表编译为可执行的正则匹配器

use std::time::Instant;

use regex::RegexBuilder;
use tracing::{debug, warn};

use super::pattern::{CompiledCategory, CompiledMatcher, matcher_source};
use crate::error::UaResult;
use crate::rule::model::ClientKind;
use crate::rule::table::RuleTable;

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译一个分类轴的规则表
    /// 跳过哨兵值；单条规则编译失败时记录告警并跳过，整体编译不失败
    pub fn compile_category<K: ClientKind>(
        rules: RuleTable<K>,
        case_insensitive: bool,
    ) -> CompiledCategory<K> {
        let start = Instant::now();
        let mut stats = CompileStats::default();
        let mut matchers = Vec::with_capacity(rules.len());

        for entry in rules.iter() {
            if entry.kind.is_unknown() {
                stats.skipped += 1;
                continue;
            }

            let source = rules.description_or(entry.kind, entry.kind.name());
            match Self::compile_matcher(entry.kind, source, case_insensitive) {
                Ok(matcher) => {
                    matchers.push(matcher);
                    stats.compiled += 1;
                }
                Err(e) => {
                    warn!(
                        "Skip {} rule {:?}: {}",
                        K::CATEGORY,
                        entry.kind,
                        e
                    );
                    stats.failed += 1;
                }
            }
        }

        debug!(
            "✅ {} rules compiled in {:?}: compiled={}, failed={}, skipped={}",
            K::CATEGORY,
            start.elapsed(),
            stats.compiled,
            stats.failed,
            stats.skipped
        );

        CompiledCategory::new(matchers)
    }

    /// 编译单条规则
    pub fn compile_matcher<K: ClientKind>(
        kind: K,
        rule_source: &str,
        case_insensitive: bool,
    ) -> UaResult<CompiledMatcher<K>> {
        let regex = RegexBuilder::new(&matcher_source(rule_source))
            .case_insensitive(case_insensitive)
            .build()?;

        Ok(CompiledMatcher { kind, regex })
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    compiled: usize,
    failed: usize,
    skipped: usize,
}
