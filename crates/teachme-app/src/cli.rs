use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use teachme_common::StudentProfile;
use teachme_config::Provider;

/// teachme: a patient, personalized tutor in your terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "teachme", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. "teachme=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Completion backend: openai or claude.
    #[arg(long)]
    pub provider: Option<Provider>,

    /// Student name.
    #[arg(long)]
    pub name: Option<String>,

    /// Student grade level.
    #[arg(long)]
    pub grade: Option<u32>,

    /// Subject to study.
    #[arg(long)]
    pub subject: Option<String>,

    /// A student interest; repeat for several. Replaces the configured list.
    #[arg(long = "interest")]
    pub interests: Vec<String>,

    /// Number of student/tutor exchanges the tutor remembers (0-50).
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(0..=50))]
    pub window: Option<usize>,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Apply command-line overrides on top of the configured profile.
pub fn resolve_profile(configured: &StudentProfile, args: &Args) -> StudentProfile {
    let mut profile = configured.clone();
    if let Some(ref name) = args.name {
        profile = profile.with_name(name);
    }
    if let Some(grade) = args.grade {
        profile = profile.with_grade(grade);
    }
    if let Some(ref subject) = args.subject {
        profile = profile.with_subject(subject);
    }
    if !args.interests.is_empty() {
        profile = profile.with_interests(args.interests.iter().cloned());
    }
    profile
}
