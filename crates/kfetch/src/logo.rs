//! 快照左侧的固定字符画

/// 字符画行数（与快照行数一致）
pub const LOGO_LINES: usize = 8;

/// 每行 21 列的吉祥物字符画
pub const LOGO: [&str; LOGO_LINES] = [
    r"                     ",
    r"          .-.        ",
    r"         (.. |       ",
    r"         <>  |       ",
    r"        / --- \      ",
    r"       ( |   | |     ",
    r"     |\\_)___/\)/\   ",
    r"    <__)------(__/   ",
];
