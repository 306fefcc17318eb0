//! Notes command - print release notes for tags between two references

use crate::cli::style::{Stylize, check, cross, spinner_style};
use anstream::eprintln;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use tag_notes::config::Config;
use tag_notes::error::Result;
use tag_notes::notes::{ReleaseReport, collect_release_notes, write_notes};
use tag_notes::platform::create_release_service;
use tag_notes::tags::GitCli;

/// Run the notes command
pub async fn run_notes(
    config: &Config,
    path: &Path,
    source: &str,
    target: &str,
    concurrency: usize,
) -> Result<()> {
    let tags = GitCli::new(path);
    let service = create_release_service(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Collecting release notes for {source}..{target}"));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let report = collect_release_notes(&tags, service.as_ref(), source, target, concurrency).await;
    spinner.finish_and_clear();

    let mut stdout = std::io::stdout().lock();
    write_notes(&mut stdout, &report.notes)?;

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &ReleaseReport) {
    let counts = format!(
        "{} of {} exclusive tags, {} orphaned",
        report.notes.len(),
        report.exclusive.len(),
        report.orphaned.len()
    );

    if report.is_degraded() {
        eprintln!(
            "{} Printed {} ({} failed)",
            cross(),
            counts.accent().for_stderr(),
            report.failures.len().to_string().warn()
        );
    } else {
        eprintln!(
            "{} Printed {}",
            check().for_stderr(),
            counts.accent().for_stderr()
        );
    }
}
