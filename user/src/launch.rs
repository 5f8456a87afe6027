//! 批量启动子进程
//!
//! 按顺序对每个程序调用`exec`，遇到第一个失败就停止，
//! 失败之后的程序不会被启动。已启动的子进程继续并发运行。

use alloc::vec::Vec;

use derive_more::Display;

use crate::process::JoinStatus;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "failed to exec `{}` (entry {})", program, index)]
pub struct LaunchError<'a> {
    /// 失败程序在列表中的下标
    pub index: usize,
    pub program: &'a str,
}

/// 结果：
/// * Ok => 按启动顺序排列的子进程ID
/// * Err => 第一个启动失败的程序
pub fn launch_all<'a, F>(
    programs: &[&'a str],
    mut exec: F,
) -> Result<Vec<usize>, LaunchError<'a>>
where
    F: FnMut(&str) -> Option<usize>,
{
    let mut pids = Vec::with_capacity(programs.len());

    for (index, &program) in programs.iter().enumerate() {
        let pid = exec(program).ok_or(LaunchError { index, program })?;
        log::debug!("launched {program} as pid {pid}");
        pids.push(pid);
    }

    Ok(pids)
}

/// 依次等待每个子进程，返回各自的结束方式
pub fn join_all<F>(pids: &[usize], mut join: F) -> Vec<(usize, Option<JoinStatus>)>
where
    F: FnMut(usize) -> Option<JoinStatus>,
{
    pids.iter().map(|&pid| (pid, join(pid))).collect()
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec;

    use super::*;
    use crate::config::MULTI_EXEC_PROGRAMS;

    #[test]
    fn launches_every_program_in_order() {
        let mut launched = Vec::new();
        let pids = launch_all(MULTI_EXEC_PROGRAMS, |name| {
            launched.push(String::from(name));
            Some(launched.len() + 1)
        })
        .unwrap();

        assert_eq!(vec![2, 3, 4, 5, 6], pids);
        assert_eq!(
            vec![
                "swap4.coff",
                "swap4.coff",
                "swap4.coff",
                "swap5.coff",
                "write10.coff"
            ],
            launched
        );
    }

    #[test]
    fn stops_at_first_failure() {
        let mut calls = 0;
        let err = launch_all(MULTI_EXEC_PROGRAMS, |name| {
            calls += 1;
            (name != "swap5.coff").then_some(calls)
        })
        .unwrap_err();

        assert_eq!(
            LaunchError {
                index: 3,
                program: "swap5.coff"
            },
            err
        );
        // write10 不应再被启动
        assert_eq!(4, calls);
    }

    #[test]
    fn first_entry_failing_launches_nothing_else() {
        let mut calls = 0;
        let err = launch_all(&["missing.coff", "write10.coff"], |_| {
            calls += 1;
            None
        })
        .unwrap_err();

        assert_eq!(0, err.index);
        assert_eq!(1, calls);
    }

    #[test]
    fn empty_list_succeeds() {
        let pids = launch_all(&[], |_| -> Option<usize> { unreachable!() }).unwrap();
        assert!(pids.is_empty());
    }

    #[test]
    fn pid_zero_is_success() {
        assert_eq!(Ok(vec![0]), launch_all(&["swap4.coff"], |_| Some(0)));
    }

    #[test]
    fn error_message() {
        let err = LaunchError {
            index: 4,
            program: "write10.coff",
        };
        assert_eq!("failed to exec `write10.coff` (entry 4)", err.to_string());
    }

    #[test]
    fn join_all_reports_each_child() {
        let statuses = join_all(&[3, 4, 5], |pid| match pid {
            3 => Some(JoinStatus::Exited(0)),
            4 => Some(JoinStatus::Abnormal),
            _ => None,
        });

        assert_eq!(
            vec![
                (3, Some(JoinStatus::Exited(0))),
                (4, Some(JoinStatus::Abnormal)),
                (5, None),
            ],
            statuses
        );
        assert!(statuses[0].1.unwrap().success());
        assert!(!statuses[1].1.unwrap().success());
    }
}
