//! 工具函数模块 - UTS 命名空间

/// UTS 名称最大长度
pub const UTS_NAME_LEN: usize = 65;

/// UTS 命名空间结构体
/// 用于隔离不同任务的主机名和域名设置
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtsNamespace {
    /// 系统名称
    pub sysname: [u8; UTS_NAME_LEN],
    /// 主机名
    pub nodename: [u8; UTS_NAME_LEN],
    /// 发行版版本
    pub release: [u8; UTS_NAME_LEN],
    /// 版本信息
    pub version: [u8; UTS_NAME_LEN],
    /// 机器类型
    pub machine: [u8; UTS_NAME_LEN],
    /// 域名
    pub domainname: [u8; UTS_NAME_LEN],
}

impl UtsNamespace {
    /// 将字符串写入定长字段，超长时截断并保留结尾 NUL
    fn fill(value: &str) -> [u8; UTS_NAME_LEN] {
        let mut buf = [0u8; UTS_NAME_LEN];
        let bytes = value.as_bytes();
        let len = bytes.len().min(UTS_NAME_LEN - 1);
        buf[..len].copy_from_slice(&bytes[..len]);
        buf
    }

    /// 读取定长字段，截断至首个 NUL
    fn str_field(field: &[u8; UTS_NAME_LEN]) -> &str {
        let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
        core::str::from_utf8(&field[..end]).unwrap_or("")
    }

    /// 创建带指定主机名和内核发行版本的 UTS 命名空间
    pub fn with_host(nodename: &str, release: &str) -> Self {
        Self {
            sysname: Self::fill("VerdaOS"),
            nodename: Self::fill(nodename),
            release: Self::fill(release),
            version: Self::fill("Version 0.1.0"),
            machine: Self::fill("unknown"),
            domainname: Self::fill("localdomain"),
        }
    }

    /// 主机名（截断至首个 NUL）
    pub fn nodename_str(&self) -> &str {
        Self::str_field(&self.nodename)
    }

    /// 内核发行版本（截断至首个 NUL）
    pub fn release_str(&self) -> &str {
        Self::str_field(&self.release)
    }
}

impl Default for UtsNamespace {
    /// 创建一个默认的 UTS 命名空间实例
    ///
    /// 默认值为：
    /// - sysname: "VerdaOS"
    /// - nodename: "localhost"
    /// - release: "0.1.0"
    /// - version: "Version 0.1.0"
    /// - machine: "unknown" (需要由 os crate 覆盖)
    /// - domainname: "localdomain"
    fn default() -> Self {
        Self::with_host("localhost", "0.1.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodename_and_release_accessors() {
        let uts = UtsNamespace::with_host("node7", "6.1.0");
        assert_eq!(uts.nodename_str(), "node7");
        assert_eq!(uts.release_str(), "6.1.0");
    }

    #[test]
    fn test_long_field_truncated_keeps_trailing_nul() {
        let long = [b'x'; 100];
        let long = core::str::from_utf8(&long).unwrap();
        let uts = UtsNamespace::with_host(long, "0.1.0");

        assert_eq!(uts.nodename_str().len(), UTS_NAME_LEN - 1);
        assert_eq!(uts.nodename[UTS_NAME_LEN - 1], 0);
    }

    #[test]
    fn test_default_host() {
        let uts = UtsNamespace::default();
        assert_eq!(uts.nodename_str(), "localhost");
        assert_eq!(uts.release_str(), "0.1.0");
    }
}
