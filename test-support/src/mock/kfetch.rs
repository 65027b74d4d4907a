//! kfetch 相关操作的 Mock 实现
//!
//! 注意：这里不直接依赖 `kfetch` crate（避免循环依赖）。
//! `kfetch` crate 在 `cfg(test)` 下为这些类型实现其 trait（例如 `KfetchOps`）。

/// Mock 的 kfetch 运行时操作
pub struct MockKfetchOps;

impl MockKfetchOps {
    pub const fn new() -> Self {
        Self
    }
}

/// 全局 Mock 实例
pub static MOCK_KFETCH_OPS: MockKfetchOps = MockKfetchOps::new();
