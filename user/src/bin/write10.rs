#![no_std]
#![no_main]
#![feature(format_args_nl)]

use user::io::{write, STDOUT};
use user::println;

const LINE: &[u8] = b"roses are red, violets are blue\n";
const TIMES: usize = 10;

#[no_mangle]
fn main() -> i32 {
    for i in 0..TIMES {
        match write(STDOUT, LINE) {
            Some(len) if len == LINE.len() => {}
            Some(len) => {
                println!("write10: short write #{i}, {len} of {} bytes", LINE.len());
                return -1;
            }
            None => {
                println!("write10: write #{i} failed");
                return -1;
            }
        }
    }

    0
}
