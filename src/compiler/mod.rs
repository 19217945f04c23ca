//! 编译模块：将有序规则表编译为可执行的正则匹配器，并按分类懒加载缓存
pub mod pattern;
pub mod compiler;
pub mod cache;

pub use self::pattern::{CompiledCategory, CompiledMatcher};
pub use self::compiler::RuleCompiler;
pub use self::cache::{CategoryGuard, MatcherCache};
