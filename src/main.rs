//! Contiker CLI - manage the Contiki-NG development environment

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use contiker::cli::{Args, DepsArgs, ExecArgs, FixArgs, InitArgs, SessionArgs, SubCommand};
use contiker::command::{all_dependencies, dependencies_for, Command, InstallOutcome};
use contiker::fix::{current_username, fix_docker_group, fix_file_permissions, fix_xhost};
use contiker::init::GitClone;
use contiker::{ContikerError, Environment, ExecutionContext, OsFamily, PackageManager, Settings};

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = args.settings();

    match args.command {
        None => handle_exec(settings, ExecArgs::default()),

        Some(SubCommand::Up) => {
            let env = Environment::new(settings);
            let up = env
                .is_up()
                .context("while checking if the environment is up")?;
            if up {
                println!("Contiker is up. To shut it down run `contiker rm`");
            } else {
                println!("Contiker is down.");
            }
            Ok(())
        }

        Some(SubCommand::Rm) => {
            Environment::new(settings)
                .rm()
                .context("while removing the contiker container")?;
            Ok(())
        }

        Some(SubCommand::Exec(exec)) => handle_exec(settings, exec),

        Some(SubCommand::Cooja(session)) => handle_cooja(settings, session),

        Some(SubCommand::Init(init)) => handle_init(init),

        Some(SubCommand::Fix(fix)) => handle_fix(settings, fix),

        Some(SubCommand::Reset(session)) => {
            let user = session.user();
            Environment::new(settings.with_volume(session.volume))
                .reset(user)
                .context("while resetting the environment")?;
            Ok(())
        }

        Some(SubCommand::Deps(deps)) => handle_deps(settings, deps),
    }
}

fn handle_exec(settings: Settings, exec: ExecArgs) -> anyhow::Result<()> {
    let user = exec.session.user();
    let env = Environment::new(settings.with_volume(exec.session.volume));
    env.exec(&exec.command, user)?;
    Ok(())
}

fn handle_cooja(settings: Settings, session: SessionArgs) -> anyhow::Result<()> {
    let user = session.user();
    let env = Environment::new(settings.with_volume(session.volume));

    if let Err(e) = env.exec(&["cooja".to_string()], user) {
        let display = std::env::var("DISPLAY").unwrap_or_default();
        eprintln!(
            "If the error was related to X11 and DISPLAY={}, then try to run:\n\tcontiker fix --xhost\n",
            display
        );
        return Err(e.into());
    }
    Ok(())
}

fn handle_init(init: InitArgs) -> anyhow::Result<()> {
    let clone = GitClone::new(
        init.git.as_deref(),
        init.folder.as_deref(),
        init.branch.as_deref(),
        !init.no_shallow,
    );
    clone
        .run(&ExecutionContext::host())
        .context("while cloning Contiki-NG")?;

    println!();
    println!("To make this checkout the permanent Contiki-NG install, add the following line to your .bashrc:");
    println!("export CNG_PATH=\"{}\"", clone.checkout_path()?.display());
    Ok(())
}

fn handle_fix(settings: Settings, fix: FixArgs) -> anyhow::Result<()> {
    if !(fix.xhost || fix.docker || fix.fileperm) {
        println!("Nothing to fix. Pass --xhost, --docker or --fileperm.");
        return Ok(());
    }

    let host = ExecutionContext::host();

    if fix.xhost || fix.docker {
        let manager = PackageManager::for_os(resolve_os(fix.os)?);

        if fix.xhost {
            fix_xhost(&host, &manager).context("while fixing xhost")?;
            println!("> Xhost fix successful");
        }

        if fix.docker {
            let username = current_username()?;
            fix_docker_group(&host, &manager, &username).context("while fixing Docker permissions")?;
            println!("> Docker fix successful");
            println!("Now restart your PC/VM to have the changes take effect");
        }
    }

    if fix.fileperm {
        let env = Environment::new(settings);
        if !env.is_up()? {
            bail!("no contiker instance is up, start one first with `contiker exec`");
        }
        fix_file_permissions(&env.context(), contiker::User::infer())
            .context("while fixing file permissions")?;
        println!("> File permission fix successful");
    }

    println!("All fixes applied");
    Ok(())
}

fn handle_deps(settings: Settings, deps: DepsArgs) -> anyhow::Result<()> {
    let os = resolve_os(deps.os)?;

    if deps.list {
        for dependency in all_dependencies() {
            println!(
                "{:<8} {}",
                dependency.probe,
                dependency.plan.get(os).unwrap_or("(not applicable)")
            );
        }
        return Ok(());
    }

    let ctx = if deps.in_container {
        settings.container_context()
    } else {
        ExecutionContext::host()
    };
    let manager = PackageManager::for_os(os);

    if !manager.check_available(&ctx) {
        manager.install_manager()?;
        return Err(ContikerError::Unavailable {
            manager: manager.binary(),
        }
        .into());
    }

    if deps.refresh {
        manager
            .update_registry(&ctx)
            .context("while refreshing the package index")?;
    }

    for dependency in all_dependencies() {
        if !dependency.applies_to(os) {
            println!("{}: not applicable on {}", dependency.probe, os);
        }
    }

    let mut failed = 0;
    for dependency in dependencies_for(os) {
        let probe = dependency.probe;
        match Command::for_dependency(dependency, &ctx).ensure_installed(&manager) {
            Ok(InstallOutcome::Present) => println!("{}: already installed", probe),
            Ok(InstallOutcome::Installed) => println!("{}: installed", probe),
            Err(e) => {
                eprintln!("{}: {}", probe, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} prerequisite(s) could not be ensured", failed);
    }
    Ok(())
}

fn resolve_os(explicit: Option<OsFamily>) -> anyhow::Result<OsFamily> {
    match explicit {
        Some(os) => Ok(os),
        None => OsFamily::detect().context("while detecting the operating system, pass --os to override"),
    }
}
