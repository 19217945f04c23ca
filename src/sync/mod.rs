//! 同步原语模块
pub mod shared_lock;

pub use self::shared_lock::{
    ExclusiveGuard, MappedSharedGuard, SharedGuard, SharedLock, UpgradeableGuard,
};
