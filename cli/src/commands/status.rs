//! `printaway status`: look up a job by reference code, optionally cancel.

use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;
use printaway::workflow::StatusView;
use printaway::ApiClient;

use crate::output::{print_alert, print_job_detail};

#[derive(Args)]
pub struct StatusArgs {
    /// Reference code from the order confirmation
    pub reference_code: String,

    /// Cancel the job (pending jobs only)
    #[arg(long)]
    pub cancel: bool,

    /// Skip the cancellation confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub async fn run(client: &ApiClient, args: StatusArgs) -> Result<()> {
    let mut view = StatusView::new();
    view.reference_code = args.reference_code;

    let alert = view.check(client).await;
    print_alert(&alert);

    if let Some(job) = view.job() {
        println!();
        print_job_detail(job);
        if let Some(message) = view.status_message() {
            println!("\n{message}");
        }
    }

    if args.cancel {
        if !view.can_cancel() {
            print_alert(&printaway::Alert::warning(
                "Cannot Cancel",
                "Only pending jobs can be cancelled.",
            ));
            return Ok(());
        }
        let confirmed = args.yes
            || Confirm::new()
                .with_prompt("Cancel this print job?")
                .default(false)
                .interact()?;
        if confirmed {
            let alert = view.cancel(client).await;
            print_alert(&alert);
        }
    }

    Ok(())
}
