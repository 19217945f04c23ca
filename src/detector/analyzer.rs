//! 分类分析器：在单个分类轴的匹配器缓存上执行有序首匹配
use tracing::trace;

use crate::compiler::MatcherCache;
use crate::rule::model::{ClientKind, Version};

/// 单分类轴分析器
pub struct CategoryAnalyzer;

impl CategoryAnalyzer {
    /// 持有共享读权限期间按优先级遍历，首个命中者胜出；全部未命中返回 (Unknown, 0.0.0.0)
    pub fn analyze<K: ClientKind>(cache: &MatcherCache<K>, user_agent: &str) -> (K, Version) {
        let matchers = cache.get();

        match matchers.first_match(user_agent) {
            Some((matcher, version)) => {
                trace!(
                    "{} matched: kind={:?}, version={}, rule={}",
                    K::CATEGORY,
                    matcher.kind,
                    version,
                    matcher.describe()
                );
                (matcher.kind, version)
            }
            None => (K::UNKNOWN, Version::ZERO),
        }
    }
}
