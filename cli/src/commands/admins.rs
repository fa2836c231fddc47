//! `printaway admins`: staff account management, superadmin only.

use anyhow::{bail, Result};
use clap::Subcommand;
use console::style;
use printaway::format::format_date_time;
use printaway::schema::CreateAdminForm;
use printaway::services;
use printaway::workflow::SessionStore;
use printaway::{AdminRole, ApiClient};

use crate::output::print_alert;

use super::require_superadmin;

#[derive(Subcommand)]
pub enum AdminsCommand {
    /// List all staff accounts
    List,
    /// Create a staff account
    Create {
        username: String,
        /// Role (admin or superadmin)
        #[arg(long, default_value = "admin")]
        role: AdminRole,
    },
}

pub async fn run(client: &ApiClient, store: &SessionStore, command: AdminsCommand) -> Result<()> {
    let (client, _user) = require_superadmin(client, store).await?;

    match command {
        AdminsCommand::List => {
            let admins = services::list_admins(&client).await?;
            println!(
                "{}",
                style(format!(
                    "{:>6}  {:<20}  {:<10}  {}",
                    "ID", "USERNAME", "ROLE", "CREATED"
                ))
                .bold()
            );
            for admin in &admins {
                println!(
                    "{:>6}  {:<20}  {:<10}  {}",
                    admin.id,
                    admin.username,
                    admin.role.as_str(),
                    format_date_time(&admin.created_at)
                );
            }
            Ok(())
        }
        AdminsCommand::Create { username, role } => {
            let password = dialoguer::Password::new()
                .with_prompt("Password for the new account")
                .with_confirmation("Repeat password", "Passwords do not match")
                .interact()?;

            let form = CreateAdminForm::new(username, password, role);
            let errors = form.validate();
            if !errors.is_empty() {
                for error in &errors {
                    eprintln!("{}: {}", error.field, error.message);
                }
                bail!("Invalid input");
            }

            let outcome = services::create_admin(&client, &form).await;
            print_alert(&outcome.alert);
            if outcome.is_success() {
                Ok(())
            } else {
                bail!("Admin creation failed")
            }
        }
    }
}
