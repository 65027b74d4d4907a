//! kfetch 系统信息字符设备
//!
//! 通过单一读写句柄向用户空间提供主机信息快照：
//!
//! - 读取返回固定 8 行的文本快照（左侧字符画 + 右侧信息段）
//! - 写入一个 u32 掩码，选择快照中出现的指标行
//! - 同一时刻最多允许一个打开的句柄，掩码配置跨句柄保留
//!
//! # 组件
//!
//! - [`ops`] - 运行时操作 trait 定义和注册
//! - [`error`] - 设备错误类型及 errno 映射
//! - [`mask`] - 信息选择掩码存储
//! - [`metrics`] - 主机指标采样
//! - [`snapshot`] - 快照缓冲区与格式化
//! - [`device`] - 设备对象与打开的文件句柄
//!
//! # 架构解耦
//!
//! 主机信息采集和调用方缓冲区拷贝通过 [`KfetchOps`] trait 抽象，
//! os crate 在启动时注册实现。

#![no_std]

extern crate alloc;

pub mod device;
pub mod error;
pub mod logo;
pub mod mask;
pub mod metrics;
pub mod ops;
pub mod snapshot;

// Re-export ops
pub use ops::{register_kfetch_ops, kfetch_ops, KfetchOps};

// Re-export 主要接口
pub use device::{KfetchDevice, KfetchFile, KFETCH};
pub use error::KfetchError;
pub use mask::MaskStore;
pub use metrics::HostMetrics;
pub use snapshot::{render, SnapshotBuf};
