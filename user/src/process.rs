use crate::args::{c_string, Argv};
use crate::syscall::*;

/// 子进程的结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStatus {
    /// 调用`exit`正常退出，附带退出码
    Exited(i32),
    /// 因异常被内核终止
    Abnormal,
}

impl JoinStatus {
    /// 由`join`的返回值和内核写回的退出码得到结束方式
    ///
    /// 结果：
    /// None => 返回值不是 1 或 0 ，`pid`不可等待
    pub fn from_raw(ret: isize, exit_code: i32) -> Option<Self> {
        match ret {
            1 => Some(Self::Exited(exit_code)),
            0 => Some(Self::Abnormal),
            _ => None,
        }
    }

    /// 正常退出且退出码为 0
    #[inline]
    pub fn success(self) -> bool {
        self == Self::Exited(0)
    }
}

pub fn exit(exit_code: i32) -> ! {
    sys_exit(exit_code)
}

/// 结果：
/// None => 调用者不是根进程，内核拒绝关机
pub fn halt() -> Option<!> {
    sys_halt();
    None
}

/// 以`args`为参数启动程序`name`，子进程与当前进程并发运行
///
/// 结果：
/// * None => 程序名或参数无法交给内核，或内核返回负数
/// * PID => 子进程ID
pub fn exec(name: &str, args: &[&str]) -> Option<usize> {
    let name = c_string(name)?;
    let argv = Argv::new(args)?;
    sys_exec(&name, argv.argc(), argv.as_ptr()).status()
}

/// 等待指定子进程结束，每个子进程只能被等待一次
///
/// 结果：
/// None => `pid`不是尚未回收的子进程
pub fn join(pid: usize) -> Option<JoinStatus> {
    let mut exit_code = 0;
    let ret = sys_join(pid, &mut exit_code);
    JoinStatus::from_raw(ret, exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_STRING_LEN;

    #[test]
    fn exec_rejects_unmarshallable_input() {
        assert_eq!(None, exec("swap4\0.coff", &[]));
        assert_eq!(None, exec("swap4.coff", &["a\0b"]));
        assert_eq!(None, exec(&"s".repeat(MAX_STRING_LEN + 1), &[]));
    }

    #[test]
    fn join_status_from_kernel_result() {
        assert_eq!(Some(JoinStatus::Exited(0)), JoinStatus::from_raw(1, 0));
        assert_eq!(Some(JoinStatus::Exited(-7)), JoinStatus::from_raw(1, -7));
        // 异常终止时内核不写退出码
        assert_eq!(Some(JoinStatus::Abnormal), JoinStatus::from_raw(0, 42));
        assert_eq!(None, JoinStatus::from_raw(-1, 0));
        assert_eq!(None, JoinStatus::from_raw(2, 0));
    }

    #[test]
    fn join_status_success() {
        assert!(JoinStatus::Exited(0).success());
        assert!(!JoinStatus::Exited(-1).success());
        assert!(!JoinStatus::Abnormal.success());
    }
}
