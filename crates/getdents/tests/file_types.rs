// crates/getdents/tests/file_types.rs
#![cfg(any(target_os = "linux", target_os = "android"))]

use dirent::{FileType, OwnedEntry, decode};
use getdents::{BufferSource, DirHandle, Error, GetDents};
use nix::sys::stat::{Mode, SFlag, makedev, mknod};
use nix::unistd::mkfifo;
use std::collections::HashMap;
use std::os::unix::fs::{MetadataExt, symlink};
use std::os::unix::net::UnixListener;
use tempfile::tempdir;

fn list(src: &mut GetDents) -> Vec<OwnedEntry> {
    let mut out = Vec::new();
    loop {
        let cap = src.capacity();
        let fill = src.fill().unwrap();
        if fill.is_empty() {
            return out;
        }
        out.extend(decode(fill, cap).map(OwnedEntry::from));
    }
}

#[test]
fn reports_type_and_inode_of_each_entry() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    std::fs::write(root.join("report.txt"), b"data").unwrap();
    std::fs::create_dir(root.join("sub")).unwrap();
    symlink("report.txt", root.join("link")).unwrap();
    mkfifo(&root.join("pipe"), Mode::from_bits_truncate(0o600)).unwrap();
    let _sock = UnixListener::bind(root.join("sock")).unwrap();

    let mut src = GetDents::open(root).unwrap();
    let entries = list(&mut src);
    let by_name: HashMap<Vec<u8>, OwnedEntry> =
        entries.into_iter().map(|e| (e.name.clone(), e)).collect();

    let expect = [
        ("report.txt", FileType::Regular),
        ("sub", FileType::Directory),
        ("link", FileType::Symlink),
        ("pipe", FileType::Fifo),
        ("sock", FileType::Socket),
    ];
    for (name, ty) in expect {
        let e = &by_name[name.as_bytes()];
        let meta = std::fs::symlink_metadata(root.join(name)).unwrap();
        assert_eq!(e.inode, meta.ino(), "{name}");
        // Some filesystems report DT_UNKNOWN and leave the type to lstat.
        assert!(e.file_type == ty || e.file_type == FileType::Unknown, "{name}");
        assert!(!e.corrupt);
    }
    assert!(by_name.contains_key(&b"."[..]));
    assert!(by_name.contains_key(&b".."[..]));
}

#[test]
#[ignore = "mknod of device nodes needs root"]
fn reports_device_nodes() {
    if unsafe { libc::geteuid() } != 0 {
        return;
    }
    let dir = tempdir().unwrap();
    let root = dir.path();
    let mode = Mode::from_bits_truncate(0o600);
    // 1:3 is /dev/null, 7:0 the first loop device.
    mknod(&root.join("null"), SFlag::S_IFCHR, mode, makedev(1, 3)).unwrap();
    mknod(&root.join("loop"), SFlag::S_IFBLK, mode, makedev(7, 0)).unwrap();

    let mut src = GetDents::open(root).unwrap();
    let entries = list(&mut src);
    for (name, ty) in [("null", FileType::CharDevice), ("loop", FileType::BlockDevice)] {
        let e = entries.iter().find(|e| e.name == name.as_bytes()).unwrap();
        let meta = std::fs::symlink_metadata(root.join(name)).unwrap();
        assert_eq!(e.inode, meta.ino(), "{name}");
        assert!(e.file_type == ty || e.file_type == FileType::Unknown, "{name}");
    }
}

#[test]
fn fill_on_unlinked_directory_reports_end() {
    let dir = tempdir().unwrap();
    let gone = dir.path().join("gone");
    std::fs::create_dir(&gone).unwrap();
    let handle = DirHandle::open(&gone).unwrap();
    std::fs::remove_dir(&gone).unwrap();

    let mut src = GetDents::new(handle);
    match src.fill() {
        Ok(fill) => assert!(fill.is_empty()),
        Err(Error::Enumerate { source }) => assert!(source.raw_os_error().is_some()),
        Err(other) => panic!("unexpected error: {other}"),
    }
}
