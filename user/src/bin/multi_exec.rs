#![no_std]
#![no_main]
#![feature(format_args_nl)]

use user::config::MULTI_EXEC_PROGRAMS;
use user::launch::launch_all;
use user::println;
use user::{exec, exit};

#[no_mangle]
fn main() -> i32 {
    match launch_all(MULTI_EXEC_PROGRAMS, |program| exec(program, &[])) {
        Ok(pids) => {
            log::info!("multi_exec: launched {} children {:?}", pids.len(), pids);
            exit(0)
        }
        Err(err) => {
            println!("multi_exec: {err}");
            exit(-1)
        }
    }
}
