//! 错误码常量
//!
//! 数值与 Linux errno 保持一致，系统调用返回时取负。

/// 操作不被允许
pub const EPERM: isize = 1;
/// 文件或目录不存在
pub const ENOENT: isize = 2;
/// I/O 错误
pub const EIO: isize = 5;
/// 无效的文件描述符
pub const EBADF: isize = 9;
/// 资源暂时不可用
pub const EAGAIN: isize = 11;
/// 内存不足
pub const ENOMEM: isize = 12;
/// 权限被拒绝
pub const EACCES: isize = 13;
/// 地址访问错误
pub const EFAULT: isize = 14;
/// 设备或资源忙
pub const EBUSY: isize = 16;
/// 文件已存在
pub const EEXIST: isize = 17;
/// 设备不存在
pub const ENODEV: isize = 19;
/// 不是目录
pub const ENOTDIR: isize = 20;
/// 是目录
pub const EISDIR: isize = 21;
/// 无效参数
pub const EINVAL: isize = 22;
/// 不是终端设备
pub const ENOTTY: isize = 25;
/// 设备空间不足
pub const ENOSPC: isize = 28;
