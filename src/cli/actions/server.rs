use crate::cli::actions::Action;
use crate::registro::new;
use anyhow::{Context, Result};
use url::Url;

/// Handle the server action
/// # Errors
/// Returns an error if the DSN is not a valid URL or the server fails to start
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server { port, dsn } => {
            // Fail early on an unparseable DSN instead of inside the pool
            let dsn = Url::parse(&dsn).context("Invalid database connection string")?;

            new(port, dsn.to_string()).await?;
        }
    }

    Ok(())
}
