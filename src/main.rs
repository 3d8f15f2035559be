use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use unscaffold::cleaner::Cleaner;
use unscaffold::cli::args::{Cli, Commands, CompletionShell, OutputFormat};
use unscaffold::cli::output;
use unscaffold::common::config::CleanupConfig;
use unscaffold::common::descriptor::SelfDescriptor;
use unscaffold::installer::{self, CommandInstaller};
use unscaffold::manifest::ManifestFile;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("unscaffold=debug")
            .init();
    }

    match run(&cli) {
        Ok(status) => ExitCode::from(status.clamp(0, 255) as u8),
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Cleanup { skip_update } => cmd_cleanup(cli, *skip_update),
        Commands::RemoveProp { path } => cmd_remove_prop(cli, path),
        Commands::Remove {
            packages,
            dev_packages,
        } => cmd_remove(cli, packages, dev_packages),
        Commands::RemoveSelf => cmd_remove_self(cli),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let shell = match shell {
                CompletionShell::Bash => clap_complete::Shell::Bash,
                CompletionShell::Zsh => clap_complete::Shell::Zsh,
                CompletionShell::Fish => clap_complete::Shell::Fish,
            };
            clap_complete::generate(shell, &mut cmd, "unscaffold", &mut std::io::stdout());
            Ok(0)
        }
    }
}

// ─── Cleanup ─────────────────────────────────────────────────────────────────

fn cmd_cleanup(cli: &Cli, skip_update: bool) -> Result<i32> {
    let manifest = ManifestFile::new(&cli.manifest);
    let root = manifest.read()?;
    let (config, config_warnings) = CleanupConfig::from_manifest(&root);
    if !cli.quiet {
        output::print_config_warnings(&config_warnings);
    }

    let descriptor = load_descriptor(cli)?;
    let program = installer_program(cli, &config);
    let installer = CommandInstaller::new(program, working_dir(&manifest));

    let mut cleaner =
        Cleaner::with_config(manifest, config, config_warnings, descriptor, installer);
    let show_progress = !cli.quiet && cli.format == OutputFormat::Human;
    let report = cleaner.clean_up(skip_update, show_progress)?;

    match cli.format {
        OutputFormat::Human => output::print_cleanup_report(&report, cli.quiet),
        OutputFormat::Json => output::print_cleanup_json(&report),
        OutputFormat::Quiet => output::print_not_required(&report.not_required),
    }

    Ok(report.status)
}

// ─── Direct manifest edits ───────────────────────────────────────────────────

fn cmd_remove_prop(cli: &Cli, path: &str) -> Result<i32> {
    let manifest = ManifestFile::new(&cli.manifest);
    let removed = manifest.remove_property(path)?;
    if !cli.quiet && cli.format == OutputFormat::Human {
        if removed {
            println!("  {} removed property {}", "✓".green(), path.bold());
        } else {
            println!("  {} property {} not present, nothing to do", "·".dimmed(), path);
        }
    }
    Ok(0)
}

fn cmd_remove(cli: &Cli, packages: &[String], dev_packages: &[String]) -> Result<i32> {
    let manifest = ManifestFile::new(&cli.manifest);
    let outcome = manifest.remove_packages(packages, dev_packages)?;
    output::print_removal_outcome(&outcome, cli.quiet || cli.format != OutputFormat::Human);
    Ok(0)
}

fn cmd_remove_self(cli: &Cli) -> Result<i32> {
    let descriptor = load_descriptor(cli)?;
    let manifest = ManifestFile::new(&cli.manifest);
    let outcome = manifest.remove_packages(std::slice::from_ref(&descriptor.name), &[])?;
    output::print_removal_outcome(&outcome, cli.quiet || cli.format != OutputFormat::Human);
    Ok(0)
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn load_descriptor(cli: &Cli) -> Result<SelfDescriptor> {
    match &cli.descriptor {
        Some(path) => SelfDescriptor::load(path),
        None => SelfDescriptor::bundled(),
    }
}

fn installer_program(cli: &Cli, config: &CleanupConfig) -> String {
    if let Some(program) = &cli.installer {
        return program.clone();
    }
    if !config.installer.is_empty() {
        return config.installer.clone();
    }
    installer::DEFAULT_PROGRAM.to_string()
}

fn working_dir(manifest: &ManifestFile) -> PathBuf {
    manifest
        .path()
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
