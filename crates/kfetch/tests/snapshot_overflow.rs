//! Integration tests for snapshot truncation on the read path.
//!
//! Kept in its own binary: the registered backend is process-global and
//! this one reports a hostname long enough to overflow the snapshot buffer.

use std::sync::Once;

use kfetch::{KfetchDevice, KfetchOps};
use uapi::kfetch::KFETCH_BUF_SIZE;
use uapi::sysinfo::SysInfo;
use uapi::uts_namespace::UtsNamespace;

static INIT: Once = Once::new();

struct LongHostOps;

impl KfetchOps for LongHostOps {
    fn utsname(&self) -> UtsNamespace {
        // UtsNamespace caps the stored name at 64 bytes, so the overflow
        // has to come from the CPU model instead.
        UtsNamespace::with_host("node7", "6.1.0")
    }

    fn cpu_model(&self) -> Option<String> {
        Some("x".repeat(4 * KFETCH_BUF_SIZE))
    }

    fn num_online_cpus(&self) -> usize {
        1
    }

    fn num_present_cpus(&self) -> usize {
        1
    }

    fn sysinfo(&self) -> SysInfo {
        SysInfo::new()
    }

    fn get_uptime_ms(&self) -> u64 {
        60_000
    }

    fn list_process_pids(&self) -> Vec<u32> {
        vec![1]
    }

    fn copy_to_caller(&self, dst: &mut [u8], src: &[u8]) -> bool {
        let n = dst.len().min(src.len());
        dst[..n].copy_from_slice(&src[..n]);
        true
    }

    fn copy_from_caller(&self, dst: &mut [u8], src: &[u8]) -> bool {
        let n = dst.len().min(src.len());
        dst[..n].copy_from_slice(&src[..n]);
        true
    }
}

static LONG_HOST_OPS: LongHostOps = LongHostOps;

fn init_once() {
    INIT.call_once(|| unsafe {
        kfetch::register_kfetch_ops(&LONG_HOST_OPS);
    });
}

#[test]
fn test_oversized_metrics_clamp_to_capacity() {
    init_once();
    let file = KfetchDevice::new().open().unwrap();

    let mut buf = [0u8; 2 * KFETCH_BUF_SIZE];
    let n = file.read(&mut buf).expect("clamped read must succeed");

    assert_eq!(n, KFETCH_BUF_SIZE);
    assert!(std::str::from_utf8(&buf[..n]).is_ok());
}

#[test]
fn test_clamped_snapshot_keeps_leading_lines() {
    init_once();
    let file = KfetchDevice::new().open().unwrap();

    let mut buf = [0u8; 2 * KFETCH_BUF_SIZE];
    let n = file.read(&mut buf).expect("clamped read must succeed");
    let text = std::str::from_utf8(&buf[..n]).unwrap();

    // Everything before the oversized CPU line survives intact.
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].ends_with("node7"));
    assert!(lines[1].ends_with("-----"));
    assert!(lines[2].ends_with("Kernel: 6.1.0"));
    assert!(lines[3].contains("CPU:    xxx"));
}
