//! Terminal rendering for alerts, jobs, and tables.

use console::{style, StyledObject};
use printaway::format::{format_date_time, payment_color, status_color};
use printaway::{Alert, AlertKind, PrintJob};

/// Prints an alert banner: colored title line plus the description.
pub fn print_alert(alert: &Alert) {
    let title = match alert.kind {
        AlertKind::Success => style(&alert.title).green().bold(),
        AlertKind::Error => style(&alert.title).red().bold(),
        AlertKind::Warning => style(&alert.title).yellow().bold(),
        AlertKind::Info => style(&alert.title).cyan().bold(),
    };
    println!("{title}");
    if let Some(description) = &alert.description {
        println!("  {description}");
    }
}

fn colorize(text: &str, color: &str) -> StyledObject<String> {
    let styled = style(text.to_string());
    match color {
        "green" => styled.green(),
        "yellow" => styled.yellow(),
        "blue" => styled.blue(),
        "red" => styled.red(),
        _ => styled,
    }
}

/// One-line summary row for a job listing.
pub fn print_job_row(job: &PrintJob) {
    println!(
        "{:>6}  {:<12}  {:<24}  {:<10}  {:<8}  {}",
        job.id,
        job.reference_code,
        truncate(&job.customer.name, 24),
        colorize(job.status.as_str(), status_color(job.status)),
        colorize(job.payment_status.as_str(), payment_color(job.payment_status)),
        format_date_time(&job.created_at),
    );
}

pub fn print_job_header() {
    println!(
        "{}",
        style(format!(
            "{:>6}  {:<12}  {:<24}  {:<10}  {:<8}  {}",
            "ID", "REFERENCE", "CUSTOMER", "STATUS", "PAYMENT", "CREATED"
        ))
        .bold()
    );
}

/// Full detail block for one job, as shown on the status page.
pub fn print_job_detail(job: &PrintJob) {
    println!("{} {}", style("Reference:").bold(), job.reference_code);
    println!("{} {}", style("Customer:").bold(), job.customer.name);
    println!("{} {}", style("Email:").bold(), job.customer.email);
    if let Some(phone) = &job.customer.phone_number {
        println!("{} {}", style("Phone:").bold(), phone);
    }
    println!(
        "{} {}",
        style("Status:").bold(),
        colorize(job.status.as_str(), status_color(job.status))
    );
    println!(
        "{} {}",
        style("Payment:").bold(),
        colorize(job.payment_status.as_str(), payment_color(job.payment_status))
    );
    println!(
        "{} {}",
        style("Created:").bold(),
        format_date_time(&job.created_at)
    );

    println!(
        "{} {} file(s), {} copies total",
        style("Files:").bold(),
        job.print_files.len(),
        job.total_copies()
    );
    for file in &job.print_files {
        let color_mode = if file.is_colored { "colored" } else { "b/w" };
        print!(
            "  - {} ({} {:.2} MB, {} x{}, {})",
            file.name, file.paper_size, file.file_size_mb, color_mode, file.copies,
            if file.is_downloaded { "downloaded" } else { "not downloaded" },
        );
        if let Some(notes) = &file.notes {
            print!("  [{notes}]");
        }
        println!();
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
