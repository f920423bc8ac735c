use clap::Args;
use lufei_app::domain::accounts::{AccountsService, PgAccountsService};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateAccountArgs {
    /// Login name
    #[arg(long)]
    username: String,

    /// Plain-text password; only its hash is stored
    #[arg(long, env = "LUFEI_ACCOUNT_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: CreateAccountArgs) -> Result<(), String> {
    if args.username.trim().is_empty() || args.password.is_empty() {
        return Err("username and password cannot be empty".to_string());
    }

    let service = PgAccountsService::new(args.database.connect().await?);

    let account = service
        .create_account(&args.username, &args.password)
        .await
        .map_err(|error| format!("failed to create account: {error}"))?;

    println!("account_id: {}", account.id);
    println!("username: {}", account.username);

    Ok(())
}
