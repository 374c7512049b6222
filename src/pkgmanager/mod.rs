//! OS-specific package manager dispatch
//!
//! Each supported OS family has exactly one backend. The backends never
//! spawn anything themselves: every availability probe and install goes
//! through the [`CommandContext`] they are handed, which is what lets the
//! same logic install onto the host or into a running container.

mod arch;
mod fedora;
mod macos;
mod os;
mod plan;
mod ubuntu;
mod windows;

pub use arch::Pacman;
pub use fedora::Dnf;
pub use macos::Homebrew;
pub use os::OsFamily;
pub use plan::PackagePlan;
pub use ubuntu::Apt;
pub use windows::Winget;

use tracing::warn;

use crate::error::Result;
use crate::exec::CommandContext;

/// Availability is advisory: a failed lookup counts as "not available".
fn probe(ctx: &dyn CommandContext, manager: &str) -> bool {
    match ctx.command_exists(manager) {
        Ok(found) => found,
        Err(err) => {
            warn!(manager, error = %err, "could not check if package manager is available");
            false
        }
    }
}

/// The package manager backend for one OS family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Arch(Pacman),
    Ubuntu(Apt),
    Fedora(Dnf),
    MacOs(Homebrew),
    Windows(Winget),
}

impl PackageManager {
    pub fn for_os(os: OsFamily) -> Self {
        match os {
            OsFamily::Arch => PackageManager::Arch(Pacman),
            OsFamily::Ubuntu => PackageManager::Ubuntu(Apt),
            OsFamily::Fedora => PackageManager::Fedora(Dnf),
            OsFamily::MacOs => PackageManager::MacOs(Homebrew),
            OsFamily::Windows => PackageManager::Windows(Winget),
        }
    }

    pub fn os(&self) -> OsFamily {
        match self {
            PackageManager::Arch(_) => OsFamily::Arch,
            PackageManager::Ubuntu(_) => OsFamily::Ubuntu,
            PackageManager::Fedora(_) => OsFamily::Fedora,
            PackageManager::MacOs(_) => OsFamily::MacOs,
            PackageManager::Windows(_) => OsFamily::Windows,
        }
    }

    /// Name of the manager's own executable
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Arch(_) => Pacman::BINARY,
            PackageManager::Ubuntu(_) => Apt::BINARY,
            PackageManager::Fedora(_) => Dnf::BINARY,
            PackageManager::MacOs(_) => Homebrew::BINARY,
            PackageManager::Windows(_) => Winget::BINARY,
        }
    }

    /// Guidance shown when the manager has to be installed by hand
    pub fn manual_install_hint(&self) -> Option<&'static str> {
        match self {
            PackageManager::MacOs(_) => Some(macos::MANUAL_INSTALL_HINT),
            PackageManager::Windows(_) => Some(windows::MANUAL_INSTALL_HINT),
            _ => None,
        }
    }

    pub fn check_available(&self, ctx: &dyn CommandContext) -> bool {
        match self {
            PackageManager::Arch(m) => m.check_available(ctx),
            PackageManager::Ubuntu(m) => m.check_available(ctx),
            PackageManager::Fedora(m) => m.check_available(ctx),
            PackageManager::MacOs(m) => m.check_available(ctx),
            PackageManager::Windows(m) => m.check_available(ctx),
        }
    }

    /// Returns whether the manager was actually installed
    pub fn install_manager(&self) -> Result<bool> {
        match self {
            PackageManager::Arch(m) => m.install_manager(),
            PackageManager::Ubuntu(m) => m.install_manager(),
            PackageManager::Fedora(m) => m.install_manager(),
            PackageManager::MacOs(m) => m.install_manager(),
            PackageManager::Windows(m) => m.install_manager(),
        }
    }

    pub fn update_registry(&self, ctx: &dyn CommandContext) -> Result<()> {
        match self {
            PackageManager::Arch(m) => m.update_registry(ctx),
            PackageManager::Ubuntu(m) => m.update_registry(ctx),
            PackageManager::Fedora(m) => m.update_registry(ctx),
            PackageManager::MacOs(m) => m.update_registry(ctx),
            PackageManager::Windows(m) => m.update_registry(ctx),
        }
    }

    pub fn install(&self, ctx: &dyn CommandContext, plan: &PackagePlan) -> Result<()> {
        match self {
            PackageManager::Arch(m) => m.install(ctx, plan),
            PackageManager::Ubuntu(m) => m.install(ctx, plan),
            PackageManager::Fedora(m) => m.install(ctx, plan),
            PackageManager::MacOs(m) => m.install(ctx, plan),
            PackageManager::Windows(m) => m.install(ctx, plan),
        }
    }
}
