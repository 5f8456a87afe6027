#![no_std]
#![no_main]
#![feature(format_args_nl)]

#[macro_use]
extern crate user;

use core::mem;

use spin::Mutex;
use user::config::{PAGE_SIZE, SWAP_PAGES};
use user::exit;

const WORDS: usize = SWAP_PAGES * PAGE_SIZE / mem::size_of::<usize>();

// 全零初始化，落在 bss 段，由内核按需分配物理页
static BUF: Mutex<[usize; WORDS]> = Mutex::new([0; WORDS]);

#[no_mangle]
fn main() -> i32 {
    let mut buf = BUF.lock();

    for (i, word) in buf.iter_mut().enumerate() {
        *word = i;
    }

    for (i, &word) in buf.iter().enumerate() {
        if word != i {
            println!("swap4: buf[{i}] = {word}, expected {i}");
            exit(-1);
        }
    }

    println!("swap4: verified {WORDS} words");
    0
}
