//! 主机指标采样

use alloc::string::{String, ToString};

use crate::ops::KfetchOps;

/// 一次查询期间使用的主机指标采样
///
/// 每次查询重新采样，不跨查询缓存；生命周期只有一次快照渲染。
pub struct HostMetrics {
    /// 主机名
    pub hostname: String,
    /// 内核发行版本
    pub kernel_release: String,
    /// CPU 型号名称
    pub cpu_model: String,
    /// 在线 CPU 数量
    pub cpu_online: usize,
    /// 系统中存在的 CPU 数量
    pub cpu_present: usize,
    /// 可用内存（MB）
    pub mem_free_mb: u64,
    /// 总内存（MB）
    pub mem_total_mb: u64,
    /// 系统运行时间（分钟）
    pub uptime_minutes: u64,
    /// 当前进程数
    pub process_count: usize,
}

impl HostMetrics {
    /// 无法获取 CPU 型号时使用的占位符
    pub const UNKNOWN_CPU_MODEL: &'static str = "unknown";

    /// 通过运行时操作进行一次采样
    ///
    /// 采样本身不会失败；缺失的子指标退化为占位符而不是中止整个快照。
    pub fn sample(ops: &dyn KfetchOps) -> Self {
        let uts = ops.utsname();
        let si = ops.sysinfo();

        Self {
            hostname: uts.nodename_str().to_string(),
            kernel_release: uts.release_str().to_string(),
            cpu_model: ops
                .cpu_model()
                .unwrap_or_else(|| Self::UNKNOWN_CPU_MODEL.to_string()),
            cpu_online: ops.num_online_cpus(),
            cpu_present: ops.num_present_cpus(),
            mem_free_mb: si.mem_free_mb(),
            mem_total_mb: si.mem_total_mb(),
            uptime_minutes: ops.get_uptime_ms() / 1000 / 60,
            process_count: ops.list_process_pids().len(),
        }
    }
}
