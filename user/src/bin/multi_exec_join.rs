#![no_std]
#![no_main]
#![feature(format_args_nl)]

use user::config::MULTI_EXEC_PROGRAMS;
use user::launch::{join_all, launch_all};
use user::println;
use user::{exec, exit, join, JoinStatus};

#[no_mangle]
fn main() -> i32 {
    let pids = match launch_all(MULTI_EXEC_PROGRAMS, |program| exec(program, &[])) {
        Ok(pids) => pids,
        Err(err) => {
            println!("multi_exec_join: {err}");
            exit(-1)
        }
    };

    let mut passed = true;
    for (pid, status) in join_all(&pids, join) {
        match status {
            Some(JoinStatus::Exited(code)) => {
                println!("multi_exec_join: pid {pid} exited with code {code}")
            }
            Some(JoinStatus::Abnormal) => {
                println!("multi_exec_join: pid {pid} terminated abnormally")
            }
            None => println!("multi_exec_join: pid {pid} could not be joined"),
        }
        passed &= status.is_some_and(JoinStatus::success);
    }

    if passed {
        println!("multi_exec_join passed!");
        0
    } else {
        -1
    }
}
