use crate::args::c_string;
use crate::config::MAX_FDS;
use crate::syscall::*;

/// 创建文件并打开，若文件已存在则先清空
pub fn creat(name: &str) -> Option<usize> {
    let name = c_string(name)?;
    sys_creat(&name).status()
}

/// 打开已存在的文件
pub fn open(name: &str) -> Option<usize> {
    let name = c_string(name)?;
    sys_open(&name).status()
}

pub fn close(fd: usize) -> Option<()> {
    if fd >= MAX_FDS {
        return None;
    }
    sys_close(fd).some()
}

/// 删除文件，当前进程中以该名字打开的描述符随之失效
pub fn unlink(name: &str) -> Option<()> {
    let name = c_string(name)?;
    sys_unlink(&name).some()
}
