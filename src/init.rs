//! Cloning a Contiki-NG checkout

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::exec::CommandContext;

pub const DEFAULT_URL: &str = "https://github.com/contiki-ng/contiki-ng.git";

pub const DEFAULT_FOLDER: &str = "contiki-ng";

/// A `git clone` of Contiki-NG with its submodules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitClone {
    pub url: String,
    pub folder: PathBuf,
    pub branch: Option<String>,
    /// Only fetch the tip of every repository
    pub shallow: bool,
    /// Parallel submodule fetches
    pub jobs: usize,
}

impl GitClone {
    pub fn new(url: Option<&str>, folder: Option<&Path>, branch: Option<&str>, shallow: bool) -> Self {
        Self {
            url: url.unwrap_or(DEFAULT_URL).to_string(),
            folder: folder.unwrap_or(Path::new(DEFAULT_FOLDER)).to_path_buf(),
            branch: branch.map(str::to_string),
            shallow,
            jobs: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }

    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "clone".to_string(),
            "--recurse-submodules".to_string(),
            format!("-j{}", self.jobs),
        ];

        if self.shallow {
            args.push("--shallow-submodules".to_string());
            args.push("--depth".to_string());
            args.push("1".to_string());
        }

        if let Some(branch) = &self.branch {
            args.push("--branch".to_string());
            args.push(branch.clone());
        }

        args.push(self.url.clone());
        args.push(self.folder.to_string_lossy().into_owned());
        args
    }

    pub fn run(&self, ctx: &dyn CommandContext) -> Result<()> {
        info!(url = %self.url, folder = %self.folder.display(), "cloning Contiki-NG");
        let args = self.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        ctx.run("git", &args)?;
        Ok(())
    }

    /// Absolute location of the checkout, for the `CNG_PATH` hint
    pub fn checkout_path(&self) -> Result<PathBuf> {
        Ok(std::path::absolute(&self.folder)?)
    }
}
