use colored::*;

use crate::cleaner::CleanupReport;
use crate::common::config::ConfigWarning;
use crate::manifest::{PackageRef, RemovalOutcome};

/// Print collected configuration warnings to stderr
pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        print_warning(&warning.to_string());
    }
}

/// One yellow warning line on stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// One red error line on stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Warnings for removal requests that matched nothing
pub fn print_not_required(missing: &[PackageRef]) {
    for miss in missing {
        print_warning(&format!(
            "{} requested to be removed but not required in {}, ignoring.",
            miss.name, miss.section
        ));
    }
}

/// Human-readable summary of a cleanup run.
///
/// Warnings and errors always go to stderr; the summary is suppressed in
/// quiet mode.
pub fn print_cleanup_report(report: &CleanupReport, quiet: bool) {
    print_not_required(&report.not_required);

    if !report.update_skipped && report.status != 0 {
        print_error("Removal failed, ignoring.");
        if report.rolled_back {
            print_warning("manifest restored from the pre-cleanup snapshot");
        }
    }

    if quiet {
        return;
    }

    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!("  unscaffold cleanup");
    println!("{}", "─".repeat(60).dimmed());

    if report.removed_properties.is_empty() {
        println!("  {} no scaffolding properties present", "·".dimmed());
    } else {
        for property in &report.removed_properties {
            println!("  {} removed property {}", "✓".green(), property.bold());
        }
    }

    for package in &report.removed_packages {
        println!(
            "  {} removed {} from {}",
            "✓".green(),
            package.name.bold(),
            package.section.to_string().dimmed()
        );
    }

    if report.update_skipped {
        println!("  {} update skipped", "·".dimmed());
    } else if report.status == 0 {
        println!(
            "  {} dependencies updated ({})",
            "✓".green(),
            format_whitelist(&report.whitelist).dimmed()
        );
    } else {
        println!(
            "  {} delegated update failed (status {})",
            "✗".red(),
            report.status
        );
    }

    println!();
}

/// The serialized report, for `--format json`
pub fn print_cleanup_json(report: &CleanupReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(err) => print_error(&format!("Failed to serialize report: {}", err)),
    }
}

/// Outcome of a direct `remove` / `remove-self` invocation
pub fn print_removal_outcome(outcome: &RemovalOutcome, quiet: bool) {
    print_not_required(&outcome.missing);
    if quiet {
        return;
    }
    for package in &outcome.removed {
        println!(
            "  {} removed {} from {}",
            "✓".green(),
            package.name.bold(),
            package.section.to_string().dimmed()
        );
    }
}

fn format_whitelist(whitelist: &[String]) -> String {
    if whitelist.is_empty() {
        "all packages".to_string()
    } else {
        whitelist.join(", ")
    }
}
