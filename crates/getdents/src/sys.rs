// crates/getdents/src/sys.rs

use std::fs::File;
use std::io;

/// One `getdents64(2)` call into `buf`. Returns the number of bytes
/// written; zero at end of directory.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) fn getdents64(dir: &File, buf: &mut [u8]) -> io::Result<usize> {
    use nix::errno::Errno;
    use std::os::fd::AsRawFd;

    let fd = dir.as_raw_fd();
    loop {
        let ret = unsafe {
            libc::syscall(
                libc::SYS_getdents64,
                fd,
                buf.as_mut_ptr().cast::<libc::c_void>(),
                buf.len(),
            )
        };
        match Errno::result(ret) {
            Ok(n) => return Ok(n as usize),
            Err(Errno::EINTR) => continue,
            Err(errno) => return Err(io::Error::from(errno)),
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub(crate) fn getdents64(_dir: &File, _buf: &mut [u8]) -> io::Result<usize> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "getdents64 is only available on Linux",
    ))
}
