use crate::cli::{Cli, Commands};
use crate::config::{BillingPolicy, DataDirs, MailConfig};
use crate::db::Database;
use crate::errors::PipelineResult;
use crate::mailings::{send_reminders, DryRunMailer, ReminderOptions, SmtpMailer};
use crate::pipeline::{build_billing_table, generate_roster_snapshot};
use crate::spreadsheets::export_processor_file;
use clap::Parser;
use tracing::error;

mod cli;
mod config;
mod db;
mod domain;
mod errors;
mod logging;
mod mailings;
mod pipeline;
mod sources;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // Mail credentials may live in a local .env file
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> PipelineResult<()> {
    let dirs = DataDirs::from(cli.dirs);
    let policy = BillingPolicy::default();
    let snapshot = Database::new(dirs.snapshot_path());

    match cli.command {
        Commands::Socios { input } => {
            generate_roster_snapshot(&dirs.socios_dir.join(input), &snapshot)?;
        }

        Commands::Boletos { input } => {
            let table = build_billing_table(&dirs.update_dir.join(input), &snapshot, &policy)?;
            export_processor_file(&table.lines, &dirs.boletos_dir, &policy)?;
        }

        Commands::Lembretes {
            input,
            only,
            preview_dir,
            dry_run,
            recipient,
        } => {
            let table = build_billing_table(&dirs.update_dir.join(input), &snapshot, &policy)?;
            let options = ReminderOptions {
                only,
                preview_dir,
                recipient_override: recipient,
            };

            if dry_run {
                send_reminders(&table.lines, &policy, &DryRunMailer, &options)?;
            } else {
                let config = MailConfig::from_env()?;
                let mailer = SmtpMailer::new(&config)?;
                send_reminders(&table.lines, &policy, &mailer, &options)?;
            }
        }
    }

    Ok(())
}
