//! kfetch 字符设备
//!
//! 设备同一时刻只允许一个打开者。打开成功返回 [`KfetchFile`]，
//! 读取产生一份按当前掩码渲染的快照，写入更新掩码。
//! 句柄析构时自动归还设备。

use alloc::sync::Arc;
use lazy_static::lazy_static;
use sync::{AccessGate, AccessToken, SpinLock};
use uapi::kfetch::KFETCH_DEV_NAME;

use crate::error::KfetchError;
use crate::mask::MaskStore;
use crate::metrics::HostMetrics;
use crate::ops::kfetch_ops;
use crate::snapshot::{SnapshotBuf, render};

/// kfetch 字符设备
///
/// 持有独占访问门与当前信息掩码。设备常驻，打开状态由访问门管理，
/// 掩码跨打开会话保留。
#[derive(Debug)]
pub struct KfetchDevice {
    /// 独占访问门
    gate: Arc<AccessGate>,

    /// 当前信息掩码
    mask: MaskStore,
}

impl KfetchDevice {
    /// 创建设备实例
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            gate: AccessGate::new(),
            mask: MaskStore::new(),
        })
    }

    /// 设备名
    pub fn name(&self) -> &'static str {
        KFETCH_DEV_NAME
    }

    /// 设备当前是否被某个句柄持有
    pub fn is_open(&self) -> bool {
        self.gate.is_held()
    }

    /// 打开设备
    ///
    /// 设备空闲时返回文件句柄，已被占用时返回 [`KfetchError::Busy`]。
    pub fn open(self: &Arc<Self>) -> Result<KfetchFile, KfetchError> {
        let token = match self.gate.try_acquire() {
            Some(token) => token,
            None => {
                log::warn!("kfetch: device already in use");
                return Err(KfetchError::Busy);
            }
        };

        Ok(KfetchFile {
            device: Arc::clone(self),
            _token: token,
            scratch: SpinLock::new(SnapshotBuf::new()),
        })
    }
}

/// 打开的 kfetch 文件句柄
///
/// 句柄存活期间独占设备，析构时释放访问令牌。
#[derive(Debug)]
pub struct KfetchFile {
    /// 所属设备
    device: Arc<KfetchDevice>,

    /// 独占访问令牌，随句柄析构释放
    _token: AccessToken,

    /// 快照暂存缓冲区，跨多次读取复用
    scratch: SpinLock<SnapshotBuf>,
}

impl KfetchFile {
    /// 读取一份系统信息快照
    ///
    /// 每次读取重新采样并按当前掩码渲染，实际拷贝
    /// `min(buf.len(), 快照长度)` 字节并返回该长度。
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, KfetchError> {
        let ops = kfetch_ops();
        let metrics = HostMetrics::sample(ops);

        let mut scratch = self.scratch.lock();
        render(self.device.mask.get(), &metrics, &mut scratch);
        if scratch.is_truncated() {
            log::warn!("kfetch: snapshot truncated to {} bytes", scratch.len());
        }

        let count = buf.len().min(scratch.len());
        if !ops.copy_to_caller(&mut buf[..count], &scratch.as_bytes()[..count]) {
            log::warn!("kfetch: failed to copy snapshot to caller");
            return Err(KfetchError::BadAddress);
        }
        Ok(count)
    }

    /// 写入新的信息掩码
    ///
    /// 载荷必须恰好为 4 字节（本机字节序的 `u32`）。掩码越界时保持
    /// 原值不变并返回 [`KfetchError::InvalidArgument`]。
    pub fn write(&self, buf: &[u8]) -> Result<usize, KfetchError> {
        let mut raw = [0u8; core::mem::size_of::<u32>()];
        if buf.len() != raw.len() {
            log::warn!(
                "kfetch: mask write expects {} bytes, got {}",
                raw.len(),
                buf.len()
            );
            return Err(KfetchError::InvalidArgument);
        }

        if !kfetch_ops().copy_from_caller(&mut raw, buf) {
            log::warn!("kfetch: failed to copy mask from caller");
            return Err(KfetchError::BadAddress);
        }

        let value = u32::from_ne_bytes(raw);
        if let Err(e) = self.device.mask.set(value) {
            log::warn!("kfetch: rejecting information mask {:#x}", value);
            return Err(e);
        }
        log::debug!("kfetch: information mask set to {:#x}", value);
        Ok(buf.len())
    }
}

lazy_static! {
    /// 全局 kfetch 设备实例
    pub static ref KFETCH: Arc<KfetchDevice> = KfetchDevice::new();
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use uapi::kfetch::{InfoMask, KFETCH_BUF_SIZE};

    use super::*;

    fn read_to_string(file: &KfetchFile) -> String {
        let mut buf = [0u8; KFETCH_BUF_SIZE];
        let n = file.read(&mut buf).unwrap();
        core::str::from_utf8(&buf[..n]).unwrap().to_string()
    }

    #[test]
    fn test_open_is_exclusive() {
        let device = KfetchDevice::new();
        let _file = device.open().unwrap();
        assert!(device.is_open());
        assert_eq!(device.open().unwrap_err(), KfetchError::Busy);
    }

    #[test]
    fn test_reopen_after_drop() {
        let device = KfetchDevice::new();
        let file = device.open().unwrap();
        drop(file);
        assert!(!device.is_open());
        assert!(device.open().is_ok());
    }

    #[test]
    fn test_read_reports_copied_length() {
        let device = KfetchDevice::new();
        let file = device.open().unwrap();

        let mut full = [0u8; KFETCH_BUF_SIZE];
        let full_len = file.read(&mut full).unwrap();
        assert!(full_len > 0 && full_len < KFETCH_BUF_SIZE);

        // A smaller caller buffer gets a prefix of the same snapshot.
        let mut small = [0u8; 16];
        let small_len = file.read(&mut small).unwrap();
        assert_eq!(small_len, 16);
        assert_eq!(&small[..], &full[..16]);
    }

    #[test]
    fn test_write_reshapes_snapshot() {
        let device = KfetchDevice::new();
        let file = device.open().unwrap();

        let mask = InfoMask::RELEASE | InfoMask::MEM;
        assert_eq!(file.write(&mask.bits().to_ne_bytes()).unwrap(), 4);

        let text = read_to_string(&file);
        assert!(text.contains("Kernel: 0.1.0"));
        assert!(text.contains("Mem:    128 MB / 512 MB"));
        assert!(!text.contains("Procs:"));
        assert!(!text.contains("uptime:"));
    }

    #[test]
    fn test_write_rejects_wrong_length() {
        let device = KfetchDevice::new();
        let file = device.open().unwrap();

        for payload in [&[0u8; 0][..], &[1u8][..], &[1, 2, 3][..], &[0; 5][..], &[0; 8][..]] {
            assert_eq!(
                file.write(payload).unwrap_err(),
                KfetchError::InvalidArgument
            );
        }

        // The default mask survives the failed writes.
        let text = read_to_string(&file);
        assert!(text.contains("Kernel:"));
        assert!(text.contains("uptime:"));
    }

    #[test]
    fn test_invalid_mask_keeps_previous_value() {
        let device = KfetchDevice::new();
        let file = device.open().unwrap();

        file.write(&InfoMask::RELEASE.bits().to_ne_bytes()).unwrap();

        let bad = 1u32 << 6;
        assert_eq!(
            file.write(&bad.to_ne_bytes()).unwrap_err(),
            KfetchError::InvalidArgument
        );

        let text = read_to_string(&file);
        assert!(text.contains("Kernel: 0.1.0"));
        assert!(!text.contains("Mem:"));
    }

    #[test]
    fn test_mask_survives_reopen() {
        let device = KfetchDevice::new();

        let file = device.open().unwrap();
        file.write(&InfoMask::NUM_PROCS.bits().to_ne_bytes()).unwrap();
        drop(file);

        let file = device.open().unwrap();
        let text = read_to_string(&file);
        assert!(text.contains("Procs:  3"));
        assert!(!text.contains("Kernel:"));
    }

    #[test]
    fn test_device_name() {
        let device = KfetchDevice::new();
        assert_eq!(device.name(), KFETCH_DEV_NAME);
    }
}
