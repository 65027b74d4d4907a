//! kfetch 设备错误类型
//!
//! 定义了与 POSIX 兼容的设备错误码，可通过 [`KfetchError::to_errno()`] 转换为系统调用错误码。

use uapi::errno::{EBUSY, EFAULT, EINVAL};

/// kfetch 设备错误类型
///
/// 各错误码对应标准 POSIX errno 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KfetchError {
    /// 设备已被其它句柄占用 (-EBUSY)
    Busy,
    /// 无效参数 (-EINVAL)
    InvalidArgument,
    /// 调用方缓冲区访问失败 (-EFAULT)
    BadAddress,
}

impl KfetchError {
    /// 转换为系统调用错误码（负数）
    pub fn to_errno(&self) -> isize {
        match self {
            KfetchError::Busy => -EBUSY,
            KfetchError::InvalidArgument => -EINVAL,
            KfetchError::BadAddress => -EFAULT,
        }
    }
}
