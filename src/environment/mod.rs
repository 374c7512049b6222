//! Lifecycle of the managed container
//!
//! These are thin pass-through calls to the runtime CLI. Queries capture
//! stdout to parse it; everything else inherits the terminal.

mod inspect;
mod user;

pub use inspect::{has_bind_mount, parse_container_list, parse_mounts, ContainerSummary, Mount};
pub use user::User;

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::config::{Settings, CONTAINER_MOUNT};
use crate::error::{ContikerError, Result};
use crate::exec::{ExecutionContext, HostContext};
use crate::prompt::confirm_stdin;

const JDK_JAVA_OPTIONS: &str = "JDK_JAVA_OPTIONS='-Dawt.useSystemAAFontSettings=on -Dswing.aatext=true -Dswing.defaultlaf=com.sun.java.swing.plaf.gtk.GTKLookAndFeel -Dsun.java2d.opengl=true'";

const FALLBACK_DISPLAY: &str = ":0";

/// Shell started when no command is given
const DEFAULT_SHELL: &str = "bash";

pub struct Environment {
    settings: Settings,
    host: HostContext,
}

impl Environment {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            host: HostContext::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execution context that runs commands inside the managed container
    pub fn context(&self) -> ExecutionContext {
        self.settings.container_context()
    }

    /// Run the runtime with the terminal attached
    fn passthrough(&self, args: &[String]) -> Result<()> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.host.run(&self.settings.runtime, &args)?;
        Ok(())
    }

    /// Run the runtime and collect what it prints
    fn capture(&self, args: &[&str]) -> Result<String> {
        debug!(runtime = %self.settings.runtime, ?args, "querying runtime");

        let output = Command::new(&self.settings.runtime)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| {
                ContikerError::Environment(format!(
                    "could not run `{}`: {}",
                    self.settings.runtime, e
                ))
            })?;

        if !output.status.success() {
            return Err(ContikerError::Environment(format!(
                "`{} {}` failed with {}",
                self.settings.runtime,
                args.join(" "),
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// The managed container, running or not
    pub fn status(&self) -> Result<Option<ContainerSummary>> {
        let filter = format!("name={}", self.settings.container);
        let output = self.capture(&["container", "ls", "-a", "-f", &filter, "--format", "json"])?;

        // The name filter matches substrings
        let mut matching: Vec<ContainerSummary> = parse_container_list(&output)?
            .into_iter()
            .filter(|c| c.has_name(&self.settings.container))
            .collect();

        if matching.len() > 1 {
            warn!(
                container = %self.settings.container,
                "multiple containers found, only using the first one"
            );
        }

        Ok(if matching.is_empty() {
            None
        } else {
            Some(matching.swap_remove(0))
        })
    }

    pub fn is_up(&self) -> Result<bool> {
        Ok(self.status()?.is_some_and(|c| c.is_running()))
    }

    pub fn mounts(&self) -> Result<Vec<Mount>> {
        let output = self.capture(&["inspect", "--format", "{{json .Mounts}}", &self.settings.container])?;
        parse_mounts(&output)
    }

    /// Arguments for `run` that create the container
    pub fn start_args(&self, user: User, display: &str, volume: &Path) -> Vec<String> {
        vec![
            "run".to_string(),
            "--name".to_string(),
            self.settings.container.clone(),
            "-it".to_string(),
            "--rm".to_string(),
            "-d".to_string(),
            "--privileged".to_string(),
            "--ipc=host".to_string(),
            "--network".to_string(),
            "host".to_string(),
            "-e".to_string(),
            format!("DISPLAY={}", display),
            "-e".to_string(),
            "_JAVA_AWT_WM_NONREPARENTING=1".to_string(),
            "-e".to_string(),
            format!("LOCAL_UID={}", user.uid),
            "-e".to_string(),
            format!("LOCAL_GID={}", user.gid),
            "-e".to_string(),
            JDK_JAVA_OPTIONS.to_string(),
            "-v".to_string(),
            "/dev/:/dev/".to_string(),
            "-v".to_string(),
            "/tmp/.X11-unix:/tmp/.X11-unix".to_string(),
            "--mount".to_string(),
            format!(
                "type=bind,source={},destination={}",
                volume.display(),
                CONTAINER_MOUNT
            ),
            self.settings.image.clone(),
        ]
    }

    pub fn start(&self, user: User) -> Result<()> {
        let display = std::env::var("DISPLAY").unwrap_or_else(|_| {
            warn!("no DISPLAY found, cooja will not be able to open a window");
            FALLBACK_DISPLAY.to_string()
        });

        let volume = self.settings.volume_path()?.ok_or_else(|| {
            ContikerError::Environment(
                "no Contiki-NG checkout given, pass --volume or set CNG_PATH".to_string(),
            )
        })?;

        info!(container = %self.settings.container, volume = %volume.display(), "starting container");
        self.passthrough(&self.start_args(user, &display, &volume))
    }

    /// Start the container unless it is already running
    pub fn ensure_up(&self, user: User) -> Result<()> {
        match self.status()? {
            None => self.start(user),
            Some(container) if !container.is_running() => {
                info!(container = %self.settings.container, "restarting stopped container");
                self.passthrough(&["start".to_string(), self.settings.container.clone()])
            }
            Some(_) => Ok(()),
        }
    }

    pub fn exec_args(&self, command: &[String], user: User) -> Vec<String> {
        let mut args = vec![
            "exec".to_string(),
            "--user".to_string(),
            user.to_string(),
            "-it".to_string(),
            self.settings.container.clone(),
        ];
        if command.is_empty() {
            args.push(DEFAULT_SHELL.to_string());
        } else {
            args.extend(command.iter().cloned());
        }
        args
    }

    /// Run `command` (a shell when empty) inside the container, starting
    /// it first if needed
    pub fn exec(&self, command: &[String], user: User) -> Result<()> {
        if let Some(volume) = self.settings.requested_volume()? {
            if self.status()?.is_some() && !has_bind_mount(&self.mounts()?, &volume) {
                let question = format!(
                    "The running {} instance uses a different checkout. Restart it with {}?",
                    self.settings.container,
                    volume.display()
                );
                if confirm_stdin(&question)? {
                    self.rm()?;
                } else {
                    println!("Using previous {} instance.", self.settings.container);
                }
            }
        }

        self.ensure_up(user)?;
        self.passthrough(&self.exec_args(command, user))
    }

    pub fn rm(&self) -> Result<()> {
        info!(container = %self.settings.container, "removing container");
        self.passthrough(&[
            "container".to_string(),
            "rm".to_string(),
            "-f".to_string(),
            self.settings.container.clone(),
        ])
    }

    pub fn pull(&self) -> Result<()> {
        println!("Pulling {}", self.settings.image);
        self.passthrough(&["pull".to_string(), self.settings.image.clone()])
    }

    /// Throw the container away and start fresh from the latest image
    pub fn reset(&self, user: User) -> Result<()> {
        if self.status()?.is_some() {
            self.rm()?;
        }
        self.pull()?;
        self.start(user)
    }
}
