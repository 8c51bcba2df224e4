// crates/getdents/src/handle.rs

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

#[derive(Debug)]
pub struct DirHandle {
    file: File,
    path: PathBuf,
}

impl DirHandle {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut opts = OpenOptions::new();
        opts.read(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            opts.custom_flags(libc::O_DIRECTORY);
        }
        let file = opts.open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: "debug::open", path = %path.display(), "opened directory");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn file(&self) -> &File {
        &self.file
    }
}
