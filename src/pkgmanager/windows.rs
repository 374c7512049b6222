//! winget, for Windows

use tracing::{info, warn};

use super::{probe, OsFamily, PackagePlan};
use crate::error::{ContikerError, Result};
use crate::exec::CommandContext;

pub(crate) const MANUAL_INSTALL_HINT: &str =
    "Could not install winget, as you need to do this yourself: install \"App Installer\" from the Microsoft Store";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Winget;

impl Winget {
    pub const BINARY: &'static str = "winget";

    pub fn check_available(&self, ctx: &dyn CommandContext) -> bool {
        probe(ctx, Self::BINARY)
    }

    /// There is no programmatic bootstrap for winget.
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
        let package = plan.package_for(OsFamily::Windows)?;

        info!(package, context = %ctx.target(), "installing with winget");
        ctx.run("winget", &["install", package])?;
        Ok(())
    }
}
