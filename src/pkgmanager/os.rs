//! Operating system families

use std::fmt;
use std::str::FromStr;

use sysinfo::System;

use crate::error::{ContikerError, Result};

/// The operating system families a package can be mapped for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OsFamily {
    Arch,
    Windows,
    Ubuntu,
    Fedora,
    MacOs,
}

impl OsFamily {
    pub const ALL: [OsFamily; 5] = [
        OsFamily::Arch,
        OsFamily::Windows,
        OsFamily::Ubuntu,
        OsFamily::Fedora,
        OsFamily::MacOs,
    ];

    /// Short identifier accepted on the command line
    pub fn id(&self) -> &'static str {
        match self {
            OsFamily::Arch => "arch",
            OsFamily::Windows => "windows",
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Fedora => "fedora",
            OsFamily::MacOs => "macos",
        }
    }

    /// Detect the family of the machine we are running on
    pub fn detect() -> Result<Self> {
        match std::env::consts::OS {
            "windows" => Ok(OsFamily::Windows),
            "macos" => Ok(OsFamily::MacOs),
            "linux" => Self::from_distribution(&System::distribution_id()),
            other => Err(ContikerError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Map an os-release `ID` onto a family
    pub fn from_distribution(id: &str) -> Result<Self> {
        match id.trim().to_lowercase().as_str() {
            "arch" | "archarm" | "manjaro" | "endeavouros" | "garuda" => Ok(OsFamily::Arch),
            "ubuntu" | "debian" | "pop" | "linuxmint" | "elementary" | "raspbian" => {
                Ok(OsFamily::Ubuntu)
            }
            "fedora" | "rhel" | "centos" | "rocky" | "almalinux" => Ok(OsFamily::Fedora),
            other => Err(ContikerError::UnsupportedPlatform(format!(
                "unknown Linux distribution '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Arch => "Arch Linux",
            OsFamily::Windows => "Windows",
            OsFamily::Ubuntu => "Ubuntu",
            OsFamily::Fedora => "Fedora",
            OsFamily::MacOs => "macOS",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OsFamily {
    type Err = ContikerError;

    fn from_str(s: &str) -> Result<Self> {
        OsFamily::ALL
            .into_iter()
            .find(|os| os.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContikerError::UnsupportedPlatform(format!("unknown OS family '{}'", s)))
    }
}
