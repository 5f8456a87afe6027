#![no_std]
#![no_main]
#![feature(format_args_nl)]

#[macro_use]
extern crate user;

use core::mem;

use spin::Mutex;
use user::config::{PAGE_SIZE, SWAP_PAGES};
use user::exit;

const WORDS_PER_PAGE: usize = PAGE_SIZE / mem::size_of::<usize>();
const WORDS: usize = SWAP_PAGES * WORDS_PER_PAGE;
const ROUNDS: usize = 2;

static BUF: Mutex<[usize; WORDS]> = Mutex::new([0; WORDS]);

#[inline]
fn pattern(i: usize) -> usize {
    i.wrapping_mul(0x9E37_79B9) ^ 0x5A5A
}

#[no_mangle]
fn main() -> i32 {
    let mut buf = BUF.lock();

    for (i, word) in buf.iter_mut().enumerate() {
        *word = pattern(i);
    }

    // 每次只读一页中的一个字，且从最后一页往前，逼迫页面乱序换入
    for round in 0..ROUNDS {
        for offset in 0..WORDS_PER_PAGE {
            for page in (0..SWAP_PAGES).rev() {
                let i = page * WORDS_PER_PAGE + offset;
                if buf[i] != pattern(i) {
                    println!(
                        "swap5: round {round}, buf[{i}] = {:#x}, expected {:#x}",
                        buf[i],
                        pattern(i)
                    );
                    exit(-1);
                }
            }
        }
    }

    println!("swap5: verified {WORDS} words {ROUNDS} times");
    0
}
