//! 快照缓冲区与格式化
//!
//! 将当前掩码与一次指标采样组合成固定 8 行的文本快照。
//! 输出写入固定容量的 [`SnapshotBuf`]，超出容量时在字符边界截断并记录。

use core::fmt::{self, Write};

use uapi::kfetch::{InfoMask, KFETCH_BUF_SIZE};

use crate::logo::LOGO;
use crate::metrics::HostMetrics;

/// 固定容量的快照缓冲区
///
/// 容量为 [`KFETCH_BUF_SIZE`] 字节。写入超出容量的内容会被丢弃并置位
/// 截断标志；丢弃发生在 UTF-8 字符边界，缓冲区内容始终是合法文本。
#[derive(Debug)]
pub struct SnapshotBuf {
    buf: [u8; KFETCH_BUF_SIZE],
    len: usize,
    truncated: bool,
}

impl SnapshotBuf {
    /// 创建空的快照缓冲区
    pub const fn new() -> Self {
        Self {
            buf: [0; KFETCH_BUF_SIZE],
            len: 0,
            truncated: false,
        }
    }

    /// 清空缓冲区，供下一次快照复用
    pub fn reset(&mut self) {
        self.len = 0;
        self.truncated = false;
    }

    /// 已写入的内容
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// 已写入的字节数
    pub fn len(&self) -> usize {
        self.len
    }

    /// 缓冲区是否为空
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 本轮写入是否发生过截断
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// 追加一段文本，容量不足时在字符边界截断
    pub fn push_str(&mut self, s: &str) {
        let avail = KFETCH_BUF_SIZE - self.len;
        if s.len() <= avail {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
            return;
        }

        let mut cut = avail;
        while cut > 0 && !s.is_char_boundary(cut) {
            cut -= 1;
        }
        self.buf[self.len..self.len + cut].copy_from_slice(&s.as_bytes()[..cut]);
        self.len += cut;
        self.truncated = true;
    }
}

impl Write for SnapshotBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

/// 按掩码与指标采样渲染 8 行快照
///
/// 每行 = 一行字符画 + 一段信息。第 0 行固定为主机名，第 1 行为与主机名
/// 等长的分隔线，其余行受掩码控制，未选中时信息段为空。Uptime 行未选中时
/// 追加两个换行而不是一个，保持既有的设备输出形状。
pub fn render(mask: InfoMask, metrics: &HostMetrics, out: &mut SnapshotBuf) {
    out.reset();

    for (idx, art) in LOGO.iter().enumerate() {
        out.push_str(art);
        match idx {
            0 => {
                out.push_str(&metrics.hostname);
                out.push_str("\n");
            }
            1 => {
                for _ in 0..metrics.hostname.len() {
                    out.push_str("-");
                }
                out.push_str("\n");
            }
            2 => {
                if mask.contains(InfoMask::RELEASE) {
                    let _ = write!(out, "Kernel: {}", metrics.kernel_release);
                }
                out.push_str("\n");
            }
            3 => {
                if mask.contains(InfoMask::CPU_MODEL) {
                    let _ = write!(out, "CPU:    {}", metrics.cpu_model);
                }
                out.push_str("\n");
            }
            4 => {
                if mask.contains(InfoMask::NUM_CPUS) {
                    let _ = write!(out, "CPUs:   {} / {}", metrics.cpu_online, metrics.cpu_present);
                }
                out.push_str("\n");
            }
            5 => {
                if mask.contains(InfoMask::MEM) {
                    let _ = write!(
                        out,
                        "Mem:    {} MB / {} MB",
                        metrics.mem_free_mb, metrics.mem_total_mb
                    );
                }
                out.push_str("\n");
            }
            6 => {
                if mask.contains(InfoMask::NUM_PROCS) {
                    let _ = write!(out, "Procs:  {}", metrics.process_count);
                }
                out.push_str("\n");
            }
            _ => {
                if mask.contains(InfoMask::UPTIME) {
                    let _ = write!(out, "uptime: {} mins", metrics.uptime_minutes);
                    out.push_str("\n");
                } else {
                    out.push_str("\n\n");
                }
            }
        }
    }
}
