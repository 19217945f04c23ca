//! Shared lock with scoped access guards
//! 读写锁封装：共享读 / 独占写 / 可升级读 三种作用域访问模式
//!
//! 所有守卫在离开作用域时（正常返回、`?` 提前返回、panic 展开）自动释放所获得的访问权。
//! 不提供超时与可重入保证：同一线程持有共享读时不得再申请独占写，需要"先读后写"时走可升级读路径。

use parking_lot::{
    MappedRwLockReadGuard, RwLock, RwLockReadGuard, RwLockUpgradableReadGuard, RwLockWriteGuard,
};

/// 共享读守卫
pub type SharedGuard<'a, T> = RwLockReadGuard<'a, T>;
/// 独占写守卫
pub type ExclusiveGuard<'a, T> = RwLockWriteGuard<'a, T>;
/// 可升级读守卫（同一时刻至多一个持有者，可与普通共享读并存）
pub type UpgradeableGuard<'a, T> = RwLockUpgradableReadGuard<'a, T>;
/// 投影到内部字段的共享读守卫
pub type MappedSharedGuard<'a, T> = MappedRwLockReadGuard<'a, T>;

#[derive(Debug, Default)]
pub struct SharedLock<T> {
    inner: RwLock<T>,
}

impl<T> SharedLock<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(value),
        }
    }

    /// 阻塞直到获得共享读权限
    pub fn acquire_shared(&self) -> SharedGuard<'_, T> {
        self.inner.read()
    }

    /// 阻塞直到获得独占写权限
    pub fn acquire_exclusive(&self) -> ExclusiveGuard<'_, T> {
        self.inner.write()
    }

    /// 阻塞直到获得可升级读权限
    pub fn acquire_upgradeable_shared(&self) -> UpgradeableGuard<'_, T> {
        self.inner.upgradable_read()
    }

    /// 可升级读 -> 独占写，升级期间不释放读权限，等待其余共享读者退出
    pub fn upgrade(guard: UpgradeableGuard<'_, T>) -> ExclusiveGuard<'_, T> {
        RwLockUpgradableReadGuard::upgrade(guard)
    }

    /// 独占写 -> 共享读，不经过解锁窗口
    pub fn downgrade(guard: ExclusiveGuard<'_, T>) -> SharedGuard<'_, T> {
        RwLockWriteGuard::downgrade(guard)
    }

    /// 可升级读 -> 共享读
    pub fn downgrade_upgradeable(guard: UpgradeableGuard<'_, T>) -> SharedGuard<'_, T> {
        RwLockUpgradableReadGuard::downgrade(guard)
    }

    /// 将共享读守卫投影到内部某个字段，释放语义不变
    pub fn map_shared<U: ?Sized>(
        guard: SharedGuard<'_, T>,
        f: impl FnOnce(&T) -> &U,
    ) -> MappedSharedGuard<'_, U> {
        RwLockReadGuard::map(guard, f)
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_shared_holders_coexist() {
        let lock = SharedLock::new(5);
        let a = lock.acquire_shared();
        let b = lock.acquire_shared();
        assert_eq!(*a + *b, 10);
        // 可升级读与普通共享读并存
        let c = lock.acquire_upgradeable_shared();
        assert_eq!(*c, 5);
    }

    #[test]
    fn test_exclusive_excludes_others() {
        let lock = SharedLock::new(0);
        {
            let mut guard = lock.acquire_exclusive();
            *guard += 1;
            assert!(lock.inner.try_read().is_none());
            assert!(lock.inner.try_write().is_none());
        }
        // 作用域结束即释放
        assert!(lock.inner.try_write().is_some());
        assert_eq!(*lock.acquire_shared(), 1);
    }

    #[test]
    fn test_upgrade_then_downgrade() {
        let lock = SharedLock::new(Vec::<u32>::new());
        let guard = lock.acquire_upgradeable_shared();
        assert!(guard.is_empty());
        let mut guard = SharedLock::upgrade(guard);
        guard.push(7);
        let guard = SharedLock::downgrade(guard);
        assert_eq!(*guard, vec![7]);
        drop(guard);
        assert_eq!(lock.into_inner(), vec![7]);
    }

    #[test]
    fn test_release_on_early_return() {
        fn bump(lock: &SharedLock<u32>, fail: bool) -> Result<(), ()> {
            let mut guard = lock.acquire_exclusive();
            if fail {
                return Err(());
            }
            *guard += 1;
            Ok(())
        }

        let lock = SharedLock::new(0);
        assert!(bump(&lock, true).is_err());
        assert!(bump(&lock, false).is_ok());
        assert_eq!(*lock.acquire_shared(), 1);
    }

    #[test]
    fn test_upgradeable_check_then_act_runs_once() {
        let lock = Arc::new(SharedLock::new(None::<u32>));
        let builds = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lock = Arc::clone(&lock);
                let builds = Arc::clone(&builds);
                thread::spawn(move || {
                    let guard = lock.acquire_upgradeable_shared();
                    if guard.is_none() {
                        let mut guard = SharedLock::upgrade(guard);
                        builds.fetch_add(1, Ordering::SeqCst);
                        *guard = Some(42);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert_eq!(*lock.acquire_shared(), Some(42));
    }
}
