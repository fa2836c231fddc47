//! `printaway jobs`: the staff queue.

use anyhow::{bail, Result};
use chrono::Utc;
use clap::Subcommand;
use console::style;
use dialoguer::Confirm;
use printaway::services::{self, UpdateIntent};
use printaway::workflow::{partition_by_age, JobStats, SessionStore};
use printaway::{Alert, ApiClient, JobStatus};

use crate::output::{print_alert, print_job_detail, print_job_header, print_job_row};

use super::require_admin;

#[derive(Subcommand)]
pub enum JobsCommand {
    /// List all jobs, split into last-24-hours and older
    List,
    /// Show queue statistics
    Stats,
    /// Show one job in full
    Show { job_id: i64 },
    /// Set a job's status
    SetStatus {
        job_id: i64,
        /// New status (pending, processing, completed, cancelled)
        status: JobStatus,
    },
    /// Mark a job as paid
    Pay { job_id: i64 },
    /// Mark a file of a job as downloaded
    Download { job_id: i64, file_id: i64 },
    /// Delete one or more jobs
    Delete {
        #[arg(required = true)]
        job_ids: Vec<i64>,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(client: &ApiClient, store: &SessionStore, command: JobsCommand) -> Result<()> {
    let (client, _user) = require_admin(client, store).await?;

    match command {
        JobsCommand::List => list(&client).await,
        JobsCommand::Stats => stats(&client).await,
        JobsCommand::Show { job_id } => {
            let job = services::get_print_job(&client, job_id).await?;
            print_job_detail(&job);
            Ok(())
        }
        JobsCommand::SetStatus { job_id, status } => {
            update(&client, job_id, UpdateIntent::Status(status)).await
        }
        JobsCommand::Pay { job_id } => update(&client, job_id, UpdateIntent::Pay).await,
        JobsCommand::Download { job_id, file_id } => {
            // Download is gated on payment, like cancel is gated on Pending.
            let job = services::get_print_job(&client, job_id).await?;
            let outcome = services::mark_file_downloaded_for(&client, &job, file_id).await;
            print_alert(&outcome.alert);
            finish(outcome.is_success())
        }
        JobsCommand::Delete { job_ids, yes } => delete(&client, &job_ids, yes).await,
    }
}

async fn list(client: &ApiClient) -> Result<()> {
    let jobs = services::list_print_jobs(client).await?;
    let (recent, older) = partition_by_age(&jobs, Utc::now());

    println!("{}", style("Last 24 hours").bold().underlined());
    print_job_header();
    for job in &recent {
        print_job_row(job);
    }
    if recent.is_empty() {
        println!("  (none)");
    }

    println!("\n{}", style("Older").bold().underlined());
    print_job_header();
    for job in &older {
        print_job_row(job);
    }
    if older.is_empty() {
        println!("  (none)");
    }

    Ok(())
}

async fn stats(client: &ApiClient) -> Result<()> {
    let jobs = services::list_print_jobs(client).await?;
    let stats = JobStats::from_jobs(&jobs, Utc::now());

    println!("{}", style("Queue statistics").bold().underlined());
    println!("Jobs:             {}", stats.total_jobs);
    println!(
        "  pending {} / processing {} / completed {} / cancelled {}",
        stats.pending, stats.processing, stats.completed, stats.cancelled
    );
    println!("Last 24 hours:    {}", stats.today_jobs);
    println!("Unique customers: {}", stats.unique_customers);
    println!(
        "Files:            {} ({} colored), {} copies",
        stats.total_files, stats.colored_files, stats.total_copies
    );
    println!("Revenue:          {:.2}", stats.revenue);

    Ok(())
}

async fn update(client: &ApiClient, job_id: i64, intent: UpdateIntent) -> Result<()> {
    let outcome = services::apply_update(client, job_id, intent).await;
    print_alert(&outcome.alert);
    finish(outcome.is_success())
}

async fn delete(client: &ApiClient, job_ids: &[i64], yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::new()
            .with_prompt(format!(
                "Delete {} job{}? This cannot be undone.",
                job_ids.len(),
                if job_ids.len() > 1 { "s" } else { "" }
            ))
            .default(false)
            .interact()?;
    if !confirmed {
        print_alert(&Alert::info("Aborted", "No jobs were deleted."));
        return Ok(());
    }

    let outcome = match job_ids {
        [job_id] => services::delete_print_job(client, *job_id).await,
        many => services::bulk_delete(client, many).await,
    };
    print_alert(&outcome.alert);
    finish(outcome.is_success())
}

fn finish(success: bool) -> Result<()> {
    if success {
        Ok(())
    } else {
        bail!("Operation failed")
    }
}
