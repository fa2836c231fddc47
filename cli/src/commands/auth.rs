//! `printaway login` / `logout` / `whoami`.

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use dialoguer::{Input, Password};
use printaway::schema::LoginForm;
use printaway::services;
use printaway::workflow::{self, SessionStore};
use printaway::ApiClient;

#[derive(Args)]
pub struct LoginArgs {
    /// Staff username; prompted for when omitted
    #[arg(long)]
    pub username: Option<String>,
}

pub async fn login(client: &ApiClient, store: &SessionStore, args: LoginArgs) -> Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let form = LoginForm::new(username, password);
    let errors = form.validate();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{}: {}", error.field, error.message);
        }
        bail!("Invalid input");
    }

    let result = services::login(client, &form).await?;
    if !result.success {
        bail!(
            "{}",
            result.error.unwrap_or_else(|| "Login failed".to_string())
        );
    }

    match result.session_cookie {
        Some(cookie) => store.save(&cookie)?,
        None => bail!("Login succeeded but the backend did not set a session cookie"),
    }

    match result.user {
        Some(user) => println!(
            "Logged in as {} ({})",
            style(&user.username).bold(),
            user.role
        ),
        None => println!("Logged in."),
    }
    Ok(())
}

pub async fn logout(client: &ApiClient, store: &SessionStore) -> Result<()> {
    let client = store.client_with_session(client);
    workflow::session::logout(&client, store).await?;
    println!("Logged out.");
    Ok(())
}

pub async fn whoami(client: &ApiClient, store: &SessionStore) -> Result<()> {
    let client = store.client_with_session(client);
    match workflow::guard_admin(&client).await {
        Some(user) => {
            println!("{} ({})", style(&user.username).bold(), user.role);
            Ok(())
        }
        None => bail!("Not logged in."),
    }
}
