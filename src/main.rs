use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use med_records::utils::logging::console::{print_load_summary, print_records};
use med_records::{EntityKind, LoadSummary, Loader, LoaderConfig, Roster};

#[derive(Parser)]
#[command(name = "med-records")]
#[command(about = "Load, validate and print medical staff and patient records", long_about = None)]
struct Cli {
    /// Doctors file
    #[arg(long)]
    doctors: Option<PathBuf>,

    /// Nurses file
    #[arg(long)]
    nurses: Option<PathBuf>,

    /// Hospital patients file
    #[arg(long)]
    hospital_patients: Option<PathBuf>,

    /// Ambulatory patients file
    #[arg(long)]
    ambulatory_patients: Option<PathBuf>,

    /// Loader configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show a spinner while reading
    #[arg(long)]
    progress: bool,

    /// Log rejected field values at warn level
    #[arg(long)]
    show_rejections: bool,

    /// Print per-file counters after the records
    #[arg(long)]
    summary: bool,
}

impl Cli {
    fn path_for(&self, kind: EntityKind) -> Option<&PathBuf> {
        match kind {
            EntityKind::Doctor => self.doctors.as_ref(),
            EntityKind::Nurse => self.nurses.as_ref(),
            EntityKind::HospitalPatient => self.hospital_patients.as_ref(),
            EntityKind::AmbulatoryPatient => self.ambulatory_patients.as_ref(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LoaderConfig::from_json_file(path)
            .with_context(|| format!("Failed to read loader config {}", path.display()))?,
        None => LoaderConfig::default(),
    };
    let show_progress = cli.progress || config.show_progress;
    let warn_on_rejections = cli.show_rejections || config.warn_on_rejections;
    let config = config
        .with_progress(show_progress)
        .with_rejection_warnings(warn_on_rejections);

    let mut loader = Loader::new(config);
    let mut roster = Roster::new();
    let mut summaries = Vec::new();

    for kind in EntityKind::ALL {
        if let Some(path) = cli.path_for(kind) {
            let summary = loader.load_into(&mut roster, kind, path);
            summaries.push((kind, summary));
        }
    }

    if summaries.is_empty() {
        warn!("No input files given, nothing to load");
        return Ok(());
    }

    for (kind, _) in &summaries {
        print_records(*kind, roster.records(*kind))
            .with_context(|| format!("Failed to print {kind} records"))?;
    }

    if cli.summary {
        for (kind, summary) in &summaries {
            print_load_summary(*kind, summary);
        }
    }

    let mut total = LoadSummary::default();
    for (_, summary) in &summaries {
        total.merge(summary);
    }
    info!(
        "Loaded {} records ({} lines skipped, {} field values rejected), {} identifiers issued",
        roster.len(),
        total.skipped,
        total.rejected_fields,
        loader.ids().issued()
    );
    Ok(())
}
