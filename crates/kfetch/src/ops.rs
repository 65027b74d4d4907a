//! kfetch 运行时操作 trait 定义和注册
//!
//! 此模块定义了 kfetch 设备需要的外部依赖接口，通过 trait 抽象实现与 os crate 的解耦。

use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use uapi::sysinfo::SysInfo;
use uapi::uts_namespace::UtsNamespace;

/// kfetch 运行时操作
///
/// 此 trait 抽象了 kfetch 设备需要的运行时操作，包括主机信息采集和
/// 调用方缓冲区拷贝。os crate 需要实现此 trait 并在启动时注册。
pub trait KfetchOps: Send + Sync {
    // ========== 系统标识 ==========

    /// 获取当前 UTS 命名空间（主机名、内核发行版本等）
    fn utsname(&self) -> UtsNamespace;

    // ========== CPU ==========

    /// 获取 CPU 型号名称（无法获取时返回 None）
    fn cpu_model(&self) -> Option<String>;

    /// 获取在线 CPU 数量
    fn num_online_cpus(&self) -> usize;

    /// 获取系统中存在的 CPU 数量
    fn num_present_cpus(&self) -> usize;

    // ========== 内存 ==========

    /// 获取系统内存信息快照
    fn sysinfo(&self) -> SysInfo;

    // ========== 时间 ==========

    /// 获取系统运行时间（毫秒）
    fn get_uptime_ms(&self) -> u64;

    // ========== 任务管理 ==========

    /// 列出所有进程 PID
    fn list_process_pids(&self) -> Vec<u32>;

    // ========== 调用方缓冲区 ==========

    /// 将 src 拷贝到调用方缓冲区 dst，失败返回 false
    fn copy_to_caller(&self, dst: &mut [u8], src: &[u8]) -> bool;

    /// 从调用方缓冲区 src 拷贝到 dst，失败返回 false
    fn copy_from_caller(&self, dst: &mut [u8], src: &[u8]) -> bool;
}

// 使用 AtomicUsize 存储 fat pointer 的两部分
static KFETCH_OPS_DATA: AtomicUsize = AtomicUsize::new(0);
static KFETCH_OPS_VTABLE: AtomicUsize = AtomicUsize::new(0);

/// 注册 kfetch 操作实现
///
/// # Safety
/// 必须在单线程环境下调用，且只能调用一次
pub unsafe fn register_kfetch_ops(ops: &'static dyn KfetchOps) {
    let ptr = ops as *const dyn KfetchOps;
    // SAFETY: 将 fat pointer 拆分为 data 和 vtable 两部分存储
    let (data, vtable) =
        unsafe { core::mem::transmute::<*const dyn KfetchOps, (usize, usize)>(ptr) };
    KFETCH_OPS_DATA.store(data, Ordering::Release);
    KFETCH_OPS_VTABLE.store(vtable, Ordering::Release);
}

/// 获取已注册的 kfetch 操作实现
///
/// # Panics
/// 如果尚未调用 [`register_kfetch_ops`] 注册实现，则 panic
#[inline]
pub fn kfetch_ops() -> &'static dyn KfetchOps {
    let data = KFETCH_OPS_DATA.load(Ordering::Acquire);
    let vtable = KFETCH_OPS_VTABLE.load(Ordering::Acquire);
    if data == 0 {
        #[cfg(test)]
        {
            extern crate test_support;
            return &test_support::mock::kfetch::MOCK_KFETCH_OPS;
        }
        #[cfg(not(test))]
        panic!("kfetch: KfetchOps not registered");
    }
    // SAFETY: 重组 fat pointer
    unsafe { &*core::mem::transmute::<(usize, usize), *const dyn KfetchOps>((data, vtable)) }
}
