//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, HostsctlPaths, Settings};
use crate::error::HostsError;
use crate::hosts::{AddOutcome, RemoveOutcome};
use crate::platform::{self, HostsEditor};

#[derive(Parser)]
#[command(name = "hostsctl")]
#[command(about = "Keep override entries present in or absent from the hosts file")]
pub struct Cli {
    /// Hosts file to edit (default: platform hosts file, HOSTSCTL_HOSTS_FILE, or config)
    #[arg(long, global = true, value_name = "PATH")]
    pub hosts_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append ENTRY as a line unless a line already contains it
    Add { entry: Option<String> },
    /// Delete every line containing ENTRY
    Remove { entry: Option<String> },
    /// Exit 0 if a line contains ENTRY, 1 otherwise
    Check { entry: Option<String> },
    /// Print the hosts file path in use
    Path,
    /// Check the hosts file is present, readable and writable
    Doctor,
    /// Show or change the saved defaults (config.toml)
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print the config file location and contents
    Show,
    /// Save a default entry and/or hosts file path
    Set {
        #[arg(long)]
        entry: Option<String>,
        #[arg(long = "path", value_name = "PATH")]
        hosts_path: Option<PathBuf>,
    },
    /// Remove all saved defaults
    Clear,
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    crate::logging::init_tracing();
    let cli = Cli::parse();
    let paths = HostsctlPaths::default_paths();
    let config = Config::load(&paths)?;
    let settings = Settings::resolve(&config, cli.hosts_file);
    tracing::debug!(hosts_file = %settings.hosts_file.display(), "resolved settings");

    match cli.command {
        Commands::Add { entry } => cmd_add(&settings, entry.as_deref()),
        Commands::Remove { entry } => cmd_remove(&settings, entry.as_deref()),
        Commands::Check { entry } => cmd_check(&settings, entry.as_deref()),
        Commands::Path => {
            println!("{}", settings.hosts_file.display());
            Ok(())
        }
        Commands::Doctor => cmd_doctor(&settings),
        Commands::Config { cmd } => cmd_config(&paths, config, cmd),
    }
}

fn require_entry<'a>(settings: &'a Settings, arg: Option<&'a str>) -> Result<&'a str> {
    settings
        .entry_or(arg)
        .ok_or_else(|| anyhow::anyhow!("no entry given; pass ENTRY or run 'hostsctl config set --entry ...'"))
}

fn fail(e: HostsError) -> anyhow::Error {
    if e.is_permission_denied() {
        eprintln!("{}", crate::alert::permission_hint());
    }
    e.into()
}

fn cmd_add(settings: &Settings, arg: Option<&str>) -> Result<()> {
    let entry = require_entry(settings, arg)?;
    let editor = platform::default_hosts_editor(settings);
    match editor.add_entry(entry).map_err(fail)? {
        AddOutcome::Added => println!("已添加到 hosts 文件: {entry}"),
        AddOutcome::AlreadyPresent => println!("hosts 条目已经存在: {entry}"),
        AddOutcome::Skipped => {}
    }
    Ok(())
}

fn cmd_remove(settings: &Settings, arg: Option<&str>) -> Result<()> {
    let entry = require_entry(settings, arg)?;
    let editor = platform::default_hosts_editor(settings);
    match editor.remove_entry(entry).map_err(fail)? {
        RemoveOutcome::Removed { count } => {
            println!("已从 hosts 文件中删除: {entry} ({count})")
        }
        RemoveOutcome::NotPresent => println!("hosts 文件中没有该条目: {entry}"),
        RemoveOutcome::Skipped => {}
    }
    Ok(())
}

fn cmd_check(settings: &Settings, arg: Option<&str>) -> Result<()> {
    let entry = require_entry(settings, arg)?;
    let editor = platform::default_hosts_editor(settings);
    if editor.has_entry(entry).map_err(fail)? {
        println!("present");
        Ok(())
    } else {
        println!("absent");
        std::process::exit(1);
    }
}

fn cmd_doctor(settings: &Settings) -> Result<()> {
    let results = crate::doctor::run_checks(settings);
    let mut failed = 0;
    for r in &results {
        let mark = if r.ok { "ok" } else { "FAIL" };
        println!("[{mark}] {}", r.message);
        if !r.ok {
            failed += 1;
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} check(s) failed");
    }
    Ok(())
}

fn cmd_config(paths: &HostsctlPaths, mut config: Config, cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Show => {
            println!("# {}", paths.config_file.display());
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCmd::Set { entry, hosts_path } => {
            if entry.is_none() && hosts_path.is_none() {
                anyhow::bail!("nothing to set; pass --entry and/or --path");
            }
            if let Some(e) = entry {
                config.entry = Some(e).filter(|e| !e.is_empty());
            }
            if let Some(p) = hosts_path {
                config.hosts_file = Some(p);
            }
            config.save(paths)?;
            println!("Saved {}", paths.config_file.display());
            Ok(())
        }
        ConfigCmd::Clear => {
            Config::default().save(paths)?;
            println!("Cleared {}", paths.config_file.display());
            Ok(())
        }
    }
}
