//! pacman, for Arch Linux and derivatives

use tracing::info;

use super::{probe, OsFamily, PackagePlan};
use crate::error::{ContikerError, Result};
use crate::exec::CommandContext;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pacman;

impl Pacman {
    pub const BINARY: &'static str = "pacman";

    pub fn check_available(&self, ctx: &dyn CommandContext) -> bool {
        probe(ctx, Self::BINARY)
    }

    /// pacman ships with the system
    pub fn install_manager(&self) -> Result<bool> {
        Ok(false)
    }

    /// `-S` always works against the synced databases; nothing to do here
    pub fn update_registry(&self, _ctx: &dyn CommandContext) -> Result<()> {
        Ok(())
    }

    pub fn install(&self, ctx: &dyn CommandContext, plan: &PackagePlan) -> Result<()> {
        if !self.check_available(ctx) {
            return Err(ContikerError::Unavailable {
                manager: Self::BINARY,
            });
        }
        let package = plan.package_for(OsFamily::Arch)?;

        info!(package, context = %ctx.target(), "installing with pacman");
        ctx.run("sudo", &["pacman", "-S", "--noconfirm", package])?;
        Ok(())
    }
}
