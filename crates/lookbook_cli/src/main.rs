//! Command-line front end for the lookbook directory.
//!
//! # Responsibility
//! - Parse arguments, build configuration and transport, dispatch commands.
//! - Map every surfaced error to a stderr line and exit code 1.

mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lookbook_core::{EntityKind, FeedbackKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "lookbook")]
#[command(about = "Browse mentors, founders and companies from the lookbook tables")]
#[command(
    after_help = "Environment:\n  MENTOR_AIRTABLE_API_TOKEN / _BASE_ID / _TABLE_NAME\n  FOUNDER_AIRTABLE_API_TOKEN / _BASE_ID / _TABLE_ID\n  COMPANY_AIRTABLE_API_TOKEN / _BASE_ID / _TABLE_ID\n  EXA_API_KEY\n  LOOKBOOK_LOG_LEVEL, LOOKBOOK_LOG_DIR"
)]
struct Cli {
    /// Saved-credentials file overlaid on top of the environment.
    #[arg(long, global = true, env = "LOOKBOOK_SETTINGS")]
    settings: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List mentors.
    Mentors(ListArgs),
    /// List founders included in the lookbook.
    Founders(ListArgs),
    /// List companies.
    Companies(ListArgs),
    /// Show one mentor by slug.
    Mentor(SlugArgs),
    /// Show one founder by slug.
    Founder(SlugArgs),
    /// Show one company and its founders.
    Company(SlugArgs),
    /// Print selectable tags and dates for one collection.
    Facets {
        #[arg(value_enum)]
        kind: KindArg,
    },
    /// Toggle a company's thumbs feedback on one record.
    Vote {
        record_id: String,
        #[arg(long)]
        company: String,
        #[arg(long, value_enum, default_value_t = ReactionArg::Up)]
        reaction: ReactionArg,
        #[arg(long, value_enum, default_value_t = KindArg::Founder)]
        table: KindArg,
    },
    /// Generate a prose description for one mentor.
    Describe { slug: String },
    /// Show or save stored credentials.
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

#[derive(Args)]
struct ListArgs {
    /// Only show entries carrying this tag; repeat to require several.
    #[arg(long = "tag")]
    tags: Vec<String>,
    /// Only show entries with exactly this date label.
    #[arg(long)]
    date: Option<String>,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args)]
struct SlugArgs {
    slug: String,
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand)]
enum SettingsCommand {
    /// Print the effective configuration with secrets redacted.
    Show,
    /// Save one credential triple.
    Save {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long)]
        token: String,
        #[arg(long)]
        base_id: String,
        #[arg(long)]
        table: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Mentor,
    Founder,
    Company,
}

impl From<KindArg> for EntityKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Mentor => EntityKind::Mentor,
            KindArg::Founder => EntityKind::Founder,
            KindArg::Company => EntityKind::Company,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReactionArg {
    Up,
    Neutral,
}

impl From<ReactionArg> for FeedbackKind {
    fn from(value: ReactionArg) -> Self {
        match value {
            ReactionArg::Up => FeedbackKind::ThumbsUp,
            ReactionArg::Neutral => FeedbackKind::ThumbsNeutral,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = lookbook_core::init_logging_from_env() {
        eprintln!("warning: logging disabled: {err}");
    }

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            log::error!("event=command_failed module=cli status=error");
            eprintln!("error: {message}");
            ExitCode::from(1)
        }
    }
}
