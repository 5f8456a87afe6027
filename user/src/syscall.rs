use core::ffi::CStr;

const HALT: usize = 0;
const EXIT: usize = 1;
const EXEC: usize = 2;
const JOIN: usize = 3;
const CREAT: usize = 4;
const OPEN: usize = 5;
const READ: usize = 6;
const WRITE: usize = 7;
const CLOSE: usize = 8;
const UNLINK: usize = 9;

#[cfg(target_arch = "riscv64")]
fn syscall(id: usize, args: [usize; 3]) -> isize {
    let mut ret;
    unsafe {
        core::arch::asm!(
            "ecall",
            inlateout("x10") args[0] => ret,
            in("x11") args[1],
            in("x12") args[2],
            in("x17") id
        );
    }

    ret
}

#[cfg(not(target_arch = "riscv64"))]
fn syscall(id: usize, _args: [usize; 3]) -> isize {
    unimplemented!("syscall {id} needs a riscv64 kernel")
}

/// 把内核的返回值转换成 `Option`
pub trait SyscallStatus {
    /// 负数表示失败，否则为有效值
    fn status(self) -> Option<usize>;

    /// 只有 0 表示成功
    fn some(self) -> Option<()>;
}

impl SyscallStatus for isize {
    #[inline]
    fn status(self) -> Option<usize> {
        (self >= 0).then_some(self as usize)
    }

    #[inline]
    fn some(self) -> Option<()> {
        (self == 0).then_some(())
    }
}

/// 仅根进程可以关机，其余进程调用会返回
pub fn sys_halt() -> isize {
    syscall(HALT, [0, 0, 0])
}

pub fn sys_exit(exit_code: i32) -> ! {
    syscall(EXIT, [exit_code as usize, 0, 0]);
    unreachable!()
}

/// 参数
/// * name: 以`.coff`结尾的程序名
/// * argc: 参数个数
/// * argv: 参数指针数组，`argc`为 0 时可为空指针
///
/// 结果
/// * -1 => 程序不存在或参数非法
/// * PID => 新建子进程的ID，子进程与当前进程并发运行
pub fn sys_exec(name: &CStr, argc: usize, argv: *const *const u8) -> isize {
    syscall(EXEC, [name.as_ptr() as usize, argc, argv as usize])
}

/// 结果
/// * 1 => 子进程正常退出，退出码已写入`status`
/// * 0 => 子进程异常终止
/// * -1 => `pid`不是当前进程尚未回收的子进程
pub fn sys_join(pid: usize, status: *mut i32) -> isize {
    syscall(JOIN, [pid, status as usize, 0])
}

/// 创建文件，若文件已存在则清空
pub fn sys_creat(name: &CStr) -> isize {
    syscall(CREAT, [name.as_ptr() as usize, 0, 0])
}

pub fn sys_open(name: &CStr) -> isize {
    syscall(OPEN, [name.as_ptr() as usize, 0, 0])
}

pub fn sys_read(fd: usize, buffer: &mut [u8]) -> isize {
    syscall(READ, [fd, buffer.as_mut_ptr() as usize, buffer.len()])
}

pub fn sys_write(fd: usize, buffer: &[u8]) -> isize {
    syscall(WRITE, [fd, buffer.as_ptr() as usize, buffer.len()])
}

pub fn sys_close(fd: usize) -> isize {
    syscall(CLOSE, [fd, 0, 0])
}

pub fn sys_unlink(name: &CStr) -> isize {
    syscall(UNLINK, [name.as_ptr() as usize, 0, 0])
}

#[cfg(test)]
mod tests {
    use super::SyscallStatus;

    #[test]
    fn status() {
        assert_eq!(None, (-1isize).status());
        assert_eq!(None, (-2isize).status());
        assert_eq!(Some(0), 0isize.status());
        assert_eq!(Some(7), 7isize.status());
    }

    #[test]
    fn some() {
        assert_eq!(Some(()), 0isize.some());
        assert_eq!(None, (-1isize).some());
        assert_eq!(None, 1isize.some());
    }
}
