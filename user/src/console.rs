use core::fmt;
use core::fmt::Write;

use crate::io::{read, write, STDIN, STDOUT};

struct Stdout;

impl Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write(STDOUT, s.as_bytes()).ok_or(fmt::Error)?;
        Ok(())
    }
}

pub fn print(args: fmt::Arguments) {
    let _ = Stdout.write_fmt(args);
}

#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::console::print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {
        $crate::console::print(::core::format_args_nl!($($arg)*))
    };
}

/// 结果：
/// None => 标准输入已关闭或读取失败
pub fn getchar() -> Option<u8> {
    let mut c = [0; 1];
    match read(STDIN, &mut c)? {
        0 => None,
        _ => Some(c[0]),
    }
}
