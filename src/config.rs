//! Runtime settings
//!
//! Everything is resolved from command-line flags (which clap can also read
//! from `CONTIKER_*` environment variables). The volume falls back to
//! `CNG_PATH` when no `--volume` is given.

use std::path::PathBuf;

use crate::error::Result;
use crate::exec::{ExecutionContext, DEFAULT_RUNTIME};

/// Name of the managed container
pub const DEFAULT_CONTAINER: &str = "contiker";

pub const DEFAULT_IMAGE: &str = "contiker/contiki-ng";

/// Where the Contiki-NG checkout is mounted inside the container
pub const CONTAINER_MOUNT: &str = "/home/user/contiki-ng";

/// Environment variable pointing at the default Contiki-NG checkout
pub const VOLUME_ENV: &str = "CNG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Container runtime binary (`docker`, `podman`, ...)
    pub runtime: String,
    pub container: String,
    pub image: String,
    /// Checkout explicitly requested on the command line
    pub volume: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            container: DEFAULT_CONTAINER.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            volume: None,
        }
    }
}

impl Settings {
    pub fn with_volume(mut self, volume: Option<PathBuf>) -> Self {
        self.volume = volume;
        self
    }

    /// The explicitly requested volume, made absolute
    pub fn requested_volume(&self) -> Result<Option<PathBuf>> {
        match &self.volume {
            Some(path) => Ok(Some(std::path::absolute(path)?)),
            None => Ok(None),
        }
    }

    /// The volume to mount: `--volume`, else `$CNG_PATH`
    pub fn volume_path(&self) -> Result<Option<PathBuf>> {
        let path = self
            .volume
            .clone()
            .or_else(|| std::env::var_os(VOLUME_ENV).map(PathBuf::from));

        match path {
            Some(path) => Ok(Some(std::path::absolute(path)?)),
            None => Ok(None),
        }
    }

    /// Execution context that indirects into the managed container
    pub fn container_context(&self) -> ExecutionContext {
        ExecutionContext::container(&self.runtime, &self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.runtime, "docker");
        assert_eq!(settings.container, "contiker");
        assert_eq!(settings.image, "contiker/contiki-ng");
        assert!(settings.requested_volume().unwrap().is_none());
    }

    #[test]
    fn test_requested_volume_is_absolute() {
        let settings = Settings::default().with_volume(Some(PathBuf::from("contiki-ng")));
        let volume = settings.requested_volume().unwrap().unwrap();
        assert!(volume.is_absolute());
        assert!(volume.ends_with("contiki-ng"));
    }

    #[test]
    fn test_explicit_volume_wins() {
        let settings = Settings::default().with_volume(Some(PathBuf::from("/srv/contiki")));
        assert_eq!(
            settings.volume_path().unwrap(),
            Some(PathBuf::from("/srv/contiki"))
        );
    }

    #[test]
    fn test_container_context_targets_container() {
        let ctx = Settings::default().container_context();
        assert!(matches!(ctx, ExecutionContext::Container(ref c) if c.name() == "contiker"));
    }
}
