//! kfetch 设备的用户空间接口
//!
//! 与内核侧共用的设备名、缓冲区容量和信息选择掩码定义。

use bitflags::bitflags;

/// 设备注册名
pub const KFETCH_DEV_NAME: &str = "kfetch";

/// 快照缓冲区容量（字节）
pub const KFETCH_BUF_SIZE: usize = 1024;

/// 可选指标的数量（掩码有效位数）
pub const KFETCH_NUM_INFO: usize = 6;

bitflags! {
    /// 信息选择掩码
    ///
    /// 每一位控制快照中一类指标行是否出现，合法取值范围 [0, 63]。
    /// 向设备写入一个 u32 即可更新掩码。
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct InfoMask: u32 {
        /// 内核发行版本
        const RELEASE = 1 << 0;
        /// CPU 数量（在线 / 存在）
        const NUM_CPUS = 1 << 1;
        /// CPU 型号
        const CPU_MODEL = 1 << 2;
        /// 内存用量
        const MEM = 1 << 3;
        /// 运行时间
        const UPTIME = 1 << 4;
        /// 进程数
        const NUM_PROCS = 1 << 5;
        /// 全部信息（设备默认值）
        const FULL_INFO = (1 << KFETCH_NUM_INFO) - 1;
    }
}
