//! Contiker - launcher for a containerized Contiki-NG environment
//!
//! Besides starting, entering and removing the environment, Contiker makes
//! sure host prerequisites are installed. The same "install it if missing"
//! logic runs on the host or inside the running container, whichever
//! [`ExecutionContext`] it is given, and dispatches to the package manager
//! of the current OS family.
//!
//! # Example
//!
//! ```no_run
//! use contiker::{command, Command, ExecutionContext, OsFamily, PackageManager};
//!
//! let ctx = ExecutionContext::host();
//! let manager = PackageManager::for_os(OsFamily::detect().unwrap());
//! let docker = Command::for_dependency(command::docker(), &ctx);
//! docker.ensure_installed(&manager).unwrap();
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod environment;
pub mod error;
pub mod exec;
pub mod fix;
pub mod init;
pub mod pkgmanager;
pub mod prompt;

pub use command::{Command, Dependency, InstallOutcome};
pub use config::Settings;
pub use environment::{Environment, User};
pub use error::{ContikerError, Result};
pub use exec::{CommandContext, ExecError, ExecutionContext, StreamMode};
pub use pkgmanager::{OsFamily, PackageManager, PackagePlan};
