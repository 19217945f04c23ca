//! 分类匹配器懒加载缓存
//! 每个分类轴一个缓存实例，状态单向迁移：未构建 -> 已构建，永不重建
//!
//! 构建在独占写权限下一次性完成，读者只可能看到"空"或"完整"两种状态。

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use super::compiler::RuleCompiler;
use super::pattern::CompiledCategory;
use crate::config::DetectorConfig;
use crate::rule::model::ClientKind;
use crate::rule::table::{BuiltinRules, RuleTable};
use crate::sync::{MappedSharedGuard, SharedLock};

/// 持有共享读权限的已构建匹配器视图，离开作用域时释放
pub type CategoryGuard<'a, K> = MappedSharedGuard<'a, CompiledCategory<K>>;

#[derive(Debug)]
struct CacheSlot<K: ClientKind> {
    built: bool,
    matchers: CompiledCategory<K>,
}

/// 懒加载匹配器缓存
#[derive(Debug)]
pub struct MatcherCache<K: ClientKind> {
    rules: RuleTable<K>,
    case_insensitive: bool,
    slot: SharedLock<CacheSlot<K>>,
    builds: AtomicUsize,
}

impl<K: ClientKind> MatcherCache<K> {
    /// 基于任意规则表创建（尚未构建）
    pub fn new(rules: RuleTable<K>, case_insensitive: bool) -> Self {
        Self {
            rules,
            case_insensitive,
            slot: SharedLock::new(CacheSlot {
                built: false,
                matchers: CompiledCategory::default(),
            }),
            builds: AtomicUsize::new(0),
        }
    }

    /// 获取已构建的匹配器集合，首次访问时触发构建
    ///
    /// 快速路径：共享读命中已构建状态直接返回。
    /// 慢速路径：可升级读下复查状态（多个线程可能同时走到这里），仍未构建则升级为独占写完成构建，
    /// 再降级为共享读返回；同一时刻至多一个可升级读持有者，构建只会发生一次。
    pub fn get(&self) -> CategoryGuard<'_, K> {
        let guard = self.slot.acquire_shared();
        if guard.built {
            return SharedLock::map_shared(guard, |slot| &slot.matchers);
        }
        drop(guard);

        let guard = self.slot.acquire_upgradeable_shared();
        let guard = if guard.built {
            SharedLock::downgrade_upgradeable(guard)
        } else {
            let mut guard = SharedLock::upgrade(guard);
            guard.matchers = self.build();
            guard.built = true;
            SharedLock::downgrade(guard)
        };

        SharedLock::map_shared(guard, |slot| &slot.matchers)
    }

    /// 是否已构建
    pub fn is_built(&self) -> bool {
        self.slot.acquire_shared().built
    }

    /// 累计构建次数（正常情况下至多为 1）
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    pub fn rules(&self) -> RuleTable<K> {
        self.rules
    }

    fn build(&self) -> CompiledCategory<K> {
        let round = self.builds.fetch_add(1, Ordering::AcqRel) + 1;
        debug!("Building {} matcher cache (round {})", K::CATEGORY, round);
        RuleCompiler::compile_category(self.rules, self.case_insensitive)
    }
}

impl<K: BuiltinRules> MatcherCache<K> {
    /// 基于内置规则表创建
    pub fn builtin(config: &DetectorConfig) -> Self {
        Self::new(K::builtin_rules(), config.case_insensitive)
    }
}
