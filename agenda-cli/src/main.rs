mod commands;
mod pdf;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Manage your meeting agenda and mirror new meetings to a spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule a new meeting (prompts for anything not passed as a flag)
    Add {
        #[arg(short, long)]
        subject: Option<String>,

        /// Officer responsible for the meeting
        #[arg(short, long)]
        officer: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// Date/time (e.g. "2025-03-20T15:00" or "tomorrow 3pm")
        #[arg(short, long)]
        when: Option<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Meetings on a given day (YYYY-MM-DD, default: today)
    Day { date: Option<String> },
    /// Month grid with meeting markers (YYYY-MM, default: current month)
    Calendar { month: Option<String> },
    /// All records, archived included
    List,
    /// Edit fields of an existing meeting
    Edit {
        id: String,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        officer: Option<String>,

        #[arg(long)]
        location: Option<String>,

        /// New date/time (e.g. "2025-03-20T15:00" or "next friday 9am")
        #[arg(long)]
        when: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Bring an archived meeting back to the active views
        #[arg(long)]
        restore: bool,
    },
    /// Archive a meeting (it stays visible in the all-records view)
    Archive {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Permanently delete a meeting. This cannot be undone
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Wipe the whole collection
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Meeting statistics over a date window
    Stats {
        /// Window start (YYYY-MM-DD, default: first day of this month)
        #[arg(long)]
        from: Option<String>,

        /// Window end (YYYY-MM-DD, default: today)
        #[arg(long)]
        to: Option<String>,
    },
    /// Meetings for one officer; without a name, lists the options
    Officer {
        name: Option<String>,

        /// Narrow to a month (1-12)
        #[arg(short, long)]
        month: Option<u32>,

        /// Narrow to a year
        #[arg(short, long)]
        year: Option<i32>,

        /// Write the result as a per-card PDF instead of printing it
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// Export all records
    Export {
        #[command(subcommand)]
        format: ExportFormat,
    },
    /// Show paths and settings, or change the sync webhook URL
    Config {
        /// Set the spreadsheet webhook URL
        #[arg(long, conflicts_with = "clear_url")]
        set_url: Option<String>,

        /// Remove the webhook URL, disabling the sync channel
        #[arg(long)]
        clear_url: bool,
    },
}

#[derive(Subcommand)]
enum ExportFormat {
    /// Comma-separated values with a UTF-8 BOM
    Csv {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Tabular PDF, one row per record
    Pdf {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Add { subject, officer, location, when, notes } => {
            commands::add::run(subject, officer, location, when, notes).await
        }
        Commands::Day { date } => commands::day::run(date.as_deref()),
        Commands::Calendar { month } => commands::calendar::run(month.as_deref()),
        Commands::List => commands::list::run(),
        Commands::Edit { id, subject, officer, location, when, notes, restore } => {
            commands::edit::run(&id, subject, officer, location, when, notes, restore)
        }
        Commands::Archive { id, yes } => commands::archive::run(&id, yes),
        Commands::Delete { id, yes } => commands::delete::run(&id, yes),
        Commands::Clear { yes } => commands::clear::run(yes),
        Commands::Stats { from, to } => commands::stats::run(from.as_deref(), to.as_deref()),
        Commands::Officer { name, month, year, pdf } => {
            commands::officer::run(name, month, year, pdf)
        }
        Commands::Export { format } => match format {
            ExportFormat::Csv { output } => commands::export::run_csv(output),
            ExportFormat::Pdf { output } => commands::export::run_pdf(output),
        },
        Commands::Config { set_url, clear_url } => commands::config::run(set_url, clear_url),
    }
}
