//! 把用户字符串整理成内核能读取的形式
//!
//! 内核按 NUL 结尾读取字符串，字符数最多为 [`MAX_STRING_LEN`] ，
//! 更长的字符串找不到结尾的 NUL 而被内核拒绝，因此在进入内核前就拒绝过长的字符串。

use alloc::ffi::CString;
use alloc::vec::Vec;
use core::ptr;

use crate::config::MAX_STRING_LEN;

/// 结果
/// None => 含有内部 NUL ，或字符数超过内核的长度上限
pub fn c_string(s: &str) -> Option<CString> {
    if s.len() > MAX_STRING_LEN {
        return None;
    }
    CString::new(s).ok()
}

/// `exec`的参数表
pub struct Argv {
    // 指针指向`args`中各字符串的堆内存，移动`Argv`不会使其失效
    args: Vec<CString>,
    ptrs: Vec<*const u8>,
}

impl Argv {
    pub fn new(args: &[&str]) -> Option<Self> {
        let args = args
            .iter()
            .map(|arg| c_string(arg))
            .collect::<Option<Vec<_>>>()?;
        let ptrs = args.iter().map(|arg| arg.as_ptr().cast()).collect();

        Some(Self { args, ptrs })
    }

    #[inline]
    pub fn argc(&self) -> usize {
        self.args.len()
    }

    /// 没有参数时返回空指针
    pub fn as_ptr(&self) -> *const *const u8 {
        if self.ptrs.is_empty() {
            ptr::null()
        } else {
            self.ptrs.as_ptr()
        }
    }
}
