//! Homebrew, for macOS

use tracing::{info, warn};

use super::{probe, OsFamily, PackagePlan};
use crate::error::{ContikerError, Result};
use crate::exec::CommandContext;

pub(crate) const MANUAL_INSTALL_HINT: &str =
    "Homebrew is not installed. Install it yourself by following the instructions at https://brew.sh";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Homebrew;

impl Homebrew {
    pub const BINARY: &'static str = "brew";

    pub fn check_available(&self, ctx: &dyn CommandContext) -> bool {
        probe(ctx, Self::BINARY)
    }

    /// Homebrew's installer is an interactive remote script, so we only
    /// point the user at it.
    pub fn install_manager(&self) -> Result<bool> {
        warn!("[ACTION] {}", MANUAL_INSTALL_HINT);
        Ok(false)
    }

    pub fn update_registry(&self, _ctx: &dyn CommandContext) -> Result<()> {
        Ok(())
    }

    pub fn install(&self, ctx: &dyn CommandContext, plan: &PackagePlan) -> Result<()> {
        if !self.check_available(ctx) {
            return Err(ContikerError::Unavailable {
                manager: Self::BINARY,
            });
        }
        let package = plan.package_for(OsFamily::MacOs)?;

        info!(package, context = %ctx.target(), "installing with brew");
        ctx.run("brew", &["install", package])?;
        Ok(())
    }
}
