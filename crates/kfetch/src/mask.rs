//! 信息选择掩码存储
//!
//! 保存设备当前的指标选择，写入前完成取值校验。

use sync::SpinLock;
use uapi::kfetch::InfoMask;

use crate::error::KfetchError;

/// 设备级掩码存储
///
/// 默认全选。`set` 校验取值后整体替换，`get` 返回最近一次成功写入的值。
/// 内部由自旋锁保护，写入路径之外的并发读取也是安全的。
#[derive(Debug)]
pub struct MaskStore {
    current: SpinLock<InfoMask>,
}

impl MaskStore {
    /// 创建默认（全选）的掩码存储
    pub const fn new() -> Self {
        Self {
            current: SpinLock::new(InfoMask::FULL_INFO),
        }
    }

    /// 校验并存储新的掩码值
    ///
    /// 仅接受 [0, 63] 内的取值。包含未定义位的值返回 InvalidArgument，
    /// 已存储的掩码保持不变。校验按无符号值进行，调用方传入的负数
    /// 重解释后会落在范围之外而被拒绝。
    pub fn set(&self, value: u32) -> Result<(), KfetchError> {
        let mask = InfoMask::from_bits(value).ok_or(KfetchError::InvalidArgument)?;
        *self.current.lock() = mask;
        Ok(())
    }

    /// 获取当前掩码
    pub fn get(&self) -> InfoMask {
        *self.current.lock()
    }
}
