//! CLI argument parsing

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Settings, DEFAULT_CONTAINER, DEFAULT_IMAGE};
use crate::environment::User;
use crate::exec::DEFAULT_RUNTIME;
use crate::pkgmanager::OsFamily;

#[derive(Parser)]
#[command(name = "contiker")]
#[command(author, version, about = "Manage the Contiki-NG development environment", long_about = None)]
pub struct Args {
    /// Without a subcommand a shell is opened in the environment
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Container runtime binary
    #[arg(long, global = true, env = "CONTIKER_RUNTIME", default_value = DEFAULT_RUNTIME)]
    pub runtime: String,

    /// Name of the managed container
    #[arg(long, global = true, env = "CONTIKER_CONTAINER", default_value = DEFAULT_CONTAINER)]
    pub container: String,

    /// Image the container is created from
    #[arg(long, global = true, env = "CONTIKER_IMAGE", default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            runtime: self.runtime.clone(),
            container: self.container.clone(),
            image: self.image.clone(),
            volume: None,
        }
    }
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Report whether the environment is up
    Up,

    /// Remove the environment
    Rm,

    /// Run a command in the environment (a shell when none is given)
    Exec(ExecArgs),

    /// Start the cooja simulator
    Cooja(SessionArgs),

    /// Clone Contiki-NG
    Init(InitArgs),

    /// Fix common issues
    Fix(FixArgs),

    /// Remove the environment, pull the latest image and start again
    Reset(SessionArgs),

    /// Make sure host prerequisites are installed
    Deps(DepsArgs),
}

/// How to enter the environment
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Contiki-NG checkout to mount (defaults to $CNG_PATH)
    #[arg(long)]
    pub volume: Option<PathBuf>,

    /// Alias for `--uid 0 --gid 0`
    #[arg(long)]
    pub root: bool,

    #[arg(short, long)]
    pub uid: Option<u32>,

    #[arg(short, long)]
    pub gid: Option<u32>,
}

impl SessionArgs {
    /// The current user, with any overrides applied
    pub fn user(&self) -> User {
        if self.root {
            return User::root();
        }

        let mut user = User::infer();
        if let Some(uid) = self.uid {
            user.uid = uid;
        }
        if let Some(gid) = self.gid {
            user.gid = gid;
        }
        user
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ExecArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// The command to pass into the environment
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InitArgs {
    /// Custom git clone URL
    #[arg(long)]
    pub git: Option<String>,

    /// Where to put the Contiki-NG folder
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// Branch to check out
    #[arg(long)]
    pub branch: Option<String>,

    /// Fetch the full history of every repository
    #[arg(long)]
    pub no_shallow: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct FixArgs {
    /// Fix the xhost (X11 connectivity) issue
    #[arg(long)]
    pub xhost: bool,

    /// Fix the Docker permission issue
    #[arg(long)]
    pub docker: bool,

    /// Give every file of the mounted checkout back to the current user
    #[arg(long)]
    pub fileperm: bool,

    /// OS family to install for (detected when omitted)
    #[arg(long)]
    pub os: Option<OsFamily>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct DepsArgs {
    /// OS family to install for (detected when omitted)
    #[arg(long)]
    pub os: Option<OsFamily>,

    /// Check and install inside the running container instead of the host
    #[arg(long)]
    pub in_container: bool,

    /// Refresh the package index first
    #[arg(long)]
    pub refresh: bool,

    /// Only print which package provides each prerequisite
    #[arg(long)]
    pub list: bool,
}
