//! 自旋锁实现
//!
//! 基于原子操作实现自旋锁机制，通过 lock_api 接入标准的 Mutex/Guard 体系。

use core::{
    hint,
    sync::atomic::{AtomicBool, Ordering},
};

/// 自旋锁的底层实现，提供互斥访问临界区的能力。
///
/// 实现 [`lock_api::RawMutex`]，由 [`SpinLock`](crate::SpinLock) 包装后使用。
/// 不可重入 (即同一执行流不能嵌套加锁)。
#[derive(Debug)]
pub struct RawSpinLock {
    lock: AtomicBool,
}

unsafe impl lock_api::RawMutex for RawSpinLock {
    const INIT: Self = RawSpinLock {
        lock: AtomicBool::new(false),
    };

    type GuardMarker = lock_api::GuardSend;

    /// 自旋等待直到获取锁。
    fn lock(&self) {
        while self
            .lock
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            hint::spin_loop();
        }
    }

    /// 尝试获取锁，成功返回 true，已被占用时立即返回 false。
    fn try_lock(&self) -> bool {
        self.lock
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// 仅释放锁标志。
    ///
    /// # Safety
    /// 调用者必须是当前持有者
    unsafe fn unlock(&self) {
        self.lock.store(false, Ordering::Release);
    }
}
