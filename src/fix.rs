//! Fixes for common setup problems

use tracing::info;

use crate::command::{self, Command};
use crate::config::CONTAINER_MOUNT;
use crate::environment::User;
use crate::error::{ContikerError, Result};
use crate::exec::CommandContext;
use crate::pkgmanager::PackageManager;

/// Let local containers connect to the X server, so cooja can open windows
pub fn fix_xhost(ctx: &dyn CommandContext, manager: &PackageManager) -> Result<()> {
    Command::for_dependency(command::xhost(), ctx).ensure_installed(manager)?;

    info!("granting local containers access to the X server");
    ctx.run("xhost", &["+local:docker"])?;
    Ok(())
}

/// Allow `username` to talk to the docker daemon without sudo
pub fn fix_docker_group(ctx: &dyn CommandContext, manager: &PackageManager, username: &str) -> Result<()> {
    Command::for_dependency(command::docker(), ctx).ensure_installed(manager)?;

    info!(username, "adding user to the docker group");
    ctx.run("sudo", &["usermod", "-aG", "docker", username])?;
    Ok(())
}

/// Hand every file of the mounted checkout back to `user`.
///
/// `ctx` must point into the running container.
pub fn fix_file_permissions(ctx: &dyn CommandContext, user: User) -> Result<()> {
    let owner = user.to_string();
    info!(owner = %owner, "changing ownership of the mounted checkout");
    ctx.run("chown", &["-R", &owner, CONTAINER_MOUNT])?;
    Ok(())
}

/// Login name of the user running this process
pub fn current_username() -> Result<String> {
    ["USER", "LOGNAME", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|name| !name.is_empty()))
        .ok_or_else(|| {
            ContikerError::Environment("could not determine the current user name".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::fake::RecordingContext;
    use crate::pkgmanager::OsFamily;

    #[test]
    fn test_xhost_installs_then_grants() {
        let ctx = RecordingContext::new().with_command("apt");
        fix_xhost(&ctx, &PackageManager::for_os(OsFamily::Ubuntu)).unwrap();

        let runs = ctx.runs.borrow();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec!["sudo", "apt", "install", "-y", "x11-xserver-utils"]);
        assert_eq!(runs[1], vec!["xhost", "+local:docker"]);
    }

    #[test]
    fn test_xhost_present_skips_install() {
        let ctx = RecordingContext::new().with_command("xhost");
        fix_xhost(&ctx, &PackageManager::for_os(OsFamily::Arch)).unwrap();
        assert_eq!(ctx.run_count(), 1);
    }

    #[test]
    fn test_xhost_not_installable_on_windows() {
        let ctx = RecordingContext::new().with_command("winget");
        let err = fix_xhost(&ctx, &PackageManager::for_os(OsFamily::Windows)).unwrap_err();
        assert!(matches!(err, ContikerError::PackageNotSpecified { os: OsFamily::Windows }));
        assert_eq!(ctx.run_count(), 0);
    }

    #[test]
    fn test_docker_group() {
        let ctx = RecordingContext::new().with_command("docker");
        fix_docker_group(&ctx, &PackageManager::for_os(OsFamily::Fedora), "dev").unwrap();
        assert_eq!(
            ctx.last_run().unwrap(),
            vec!["sudo", "usermod", "-aG", "docker", "dev"]
        );
    }

    #[test]
    fn test_file_permissions() {
        let ctx = RecordingContext::new();
        fix_file_permissions(&ctx, User::new(1000, 1000)).unwrap();
        assert_eq!(
            ctx.last_run().unwrap(),
            vec!["chown", "-R", "1000:1000", "/home/user/contiki-ng"]
        );
    }
}
