//! 用户库与测试程序共用的常量

/// 16KB 的堆空间
pub const USER_HEAP_SIZE: usize = 0x4000;

/// 内核读取用户字符串时的最大字符数，不含结尾的 NUL
pub const MAX_STRING_LEN: usize = 256;

/// 每个进程最多持有的文件描述符数
pub const MAX_FDS: usize = 16;

/// 换页测试按此粒度跨页访问
pub const PAGE_SIZE: usize = 0x1000;

/// 换页测试缓冲区占用的页数，需明显多于内核分给单个进程的物理页
pub const SWAP_PAGES: usize = 64;

/// multi_exec 依次启动的程序：三个 swap4 、一个 swap5 、一个 write10
pub static MULTI_EXEC_PROGRAMS: &[&str] = &[
    "swap4.coff",
    "swap4.coff",
    "swap4.coff",
    "swap5.coff",
    "write10.coff",
];
