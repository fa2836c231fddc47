//! `printaway order`: submit a new print job.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use printaway::workflow::{FileUpload, OrderForm, PrintOptions};
use printaway::{ApiClient, Customer, PaperSize};

use crate::output::print_alert;

#[derive(Args)]
pub struct OrderArgs {
    /// Files to print
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Customer name
    #[arg(long)]
    pub name: String,

    /// Customer email
    #[arg(long)]
    pub email: String,

    /// Customer phone number (11 digits)
    #[arg(long)]
    pub phone: Option<String>,

    /// Copies per file
    #[arg(long, default_value_t = 1)]
    pub copies: u32,

    /// Print in color
    #[arg(long)]
    pub colored: bool,

    /// Paper size (A4, A3, A2, Letter, Long)
    #[arg(long, default_value = "A4")]
    pub paper_size: PaperSize,

    /// Notes applied to every file
    #[arg(long)]
    pub notes: Option<String>,
}

pub async fn run(client: &ApiClient, args: OrderArgs) -> Result<()> {
    let mut form = OrderForm::new();
    form.customer = Customer {
        name: args.name,
        email: args.email,
        phone_number: args.phone,
    };
    form.default_options = PrintOptions {
        copies: args.copies,
        is_colored: args.colored,
        paper_size: args.paper_size,
    };

    for path in &args.files {
        let id = form.add_file(FileUpload::from_path(path)?);
        if let (Some(notes), Some(entry)) = (&args.notes, form.entry_mut(id)) {
            entry.notes = Some(notes.clone());
        }
    }

    let errors = form.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{}: {}", error.field, error.message);
        }
        bail!("Order form is invalid");
    }

    let outcome = form.submit(client).await;
    print_alert(&outcome.alert);
    if let Some(code) = &outcome.reference_code {
        println!("Reference code: {code}");
    }
    if outcome.is_success() {
        Ok(())
    } else {
        bail!("Order submission failed")
    }
}
