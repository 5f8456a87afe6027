use crate::config::MAX_FDS;
use crate::syscall::*;

pub const STDIN: usize = 0;
pub const STDOUT: usize = 1;

pub fn read(fd: usize, buf: &mut [u8]) -> Option<usize> {
    if fd >= MAX_FDS {
        return None;
    }
    sys_read(fd, buf).status()
}

pub fn write(fd: usize, buf: &[u8]) -> Option<usize> {
    if fd >= MAX_FDS {
        return None;
    }
    sys_write(fd, buf).status()
}
