#![cfg_attr(not(test), no_std)]
#![feature(linkage)]
#![feature(format_args_nl)]
#![feature(never_type)]

extern crate alloc;

#[macro_use]
pub mod console;

pub mod args;
pub mod config;
pub mod fs;
pub mod io;
pub mod launch;
pub mod process;

#[cfg(not(test))]
mod lang_items;
mod logging;
mod syscall;

pub use self::process::{exec, exit, halt, join, JoinStatus};

#[cfg(not(test))]
use buddy_system_allocator::LockedHeap;

#[cfg(not(test))]
use crate::config::USER_HEAP_SIZE;

#[cfg(not(test))]
static mut HEAP_SPACE: [u8; USER_HEAP_SIZE] = [0; USER_HEAP_SIZE];

#[cfg(not(test))]
#[global_allocator]
static HEAP: LockedHeap<32> = LockedHeap::empty();

#[cfg(not(test))]
#[no_mangle]
#[link_section = ".text.entry"]
pub extern "C" fn _start() -> ! {
    unsafe {
        HEAP.lock().init(
            core::ptr::addr_of_mut!(HEAP_SPACE) as usize,
            USER_HEAP_SIZE,
        );
    }
    logging::init();
    exit(main())
}

// 弱链接会让编译器优先去 bin 目录寻找 main 。
// 若没找到，就链接此 main ，但运行时会立马报错。
#[cfg(not(test))]
#[no_mangle]
#[linkage = "weak"]
fn main() -> i32 {
    panic!("Cannot find main!");
}
