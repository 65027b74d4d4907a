//! 独占访问门
//!
//! 单持有者的非阻塞互斥原语。获取成功返回 RAII 令牌，
//! 令牌在任意退出路径上被 Drop 即释放占用。

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

/// 独占访问门，同一时刻最多允许一个持有者。
///
/// 状态只有 Free 和 Held 两种，转换由获取/释放驱动。
/// 获取是非阻塞的：已被占用时立即失败，不排队不等待。
#[derive(Debug)]
pub struct AccessGate {
    held: AtomicBool,
}

impl AccessGate {
    /// 创建处于空闲状态的访问门
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            held: AtomicBool::new(false),
        })
    }

    /// 尝试获取访问门
    ///
    /// 成功返回令牌；已被占用时返回 None。令牌被 Drop 时自动释放。
    pub fn try_acquire(self: &Arc<Self>) -> Option<AccessToken> {
        if self
            .held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            Some(AccessToken {
                gate: Arc::clone(self),
            })
        } else {
            None
        }
    }

    /// 检查访问门当前是否被持有
    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }
}

/// 持有 [`AccessGate`] 的证明。
///
/// 同一访问门同一时刻最多存在一个令牌；Drop 时将门恢复为空闲。
#[derive(Debug)]
pub struct AccessToken {
    gate: Arc<AccessGate>,
}

impl Drop for AccessToken {
    fn drop(&mut self) {
        self.gate.held.store(false, Ordering::Release);
    }
}
