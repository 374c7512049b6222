//! The user commands run as inside the container

use std::fmt;

#[cfg(unix)]
use nix::unistd::{getgid, getuid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub uid: u32,
    pub gid: u32,
}

impl User {
    pub fn new(uid: u32, gid: u32) -> Self {
        Self { uid, gid }
    }

    pub fn root() -> Self {
        Self { uid: 0, gid: 0 }
    }

    /// The user running this process, so files in the mounted checkout keep
    /// their owner
    #[cfg(unix)]
    pub fn infer() -> Self {
        Self {
            uid: getuid().as_raw(),
            gid: getgid().as_raw(),
        }
    }

    #[cfg(not(unix))]
    pub fn infer() -> Self {
        Self::default()
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            uid: 1000,
            gid: 1000,
        }
    }
}

/// `uid:gid`, as taken by `--user` and `chown`
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.uid, self.gid)
    }
}
