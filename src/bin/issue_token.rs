//! Mints a development bearer token signed with `BISCUIT_ROOT_PRIVATE_KEY`.
use anyhow::{Context, Result};
use car_rest_api::application::{dto::TokenSubject, ports::security::TokenManager};
use car_rest_api::config::AppConfig;
use car_rest_api::domain::security::parse_role;
use car_rest_api::infrastructure::security::token::BiscuitTokenManager;
use clap::Parser;
use std::collections::HashSet;

#[derive(Debug, Parser)]
#[command(name = "issue_token", about = "Issue a bearer token for the car API")]
struct Args {
    /// Principal name recorded in the token.
    #[arg(long)]
    user: String,

    /// Optional role granting its default authorities (`admin` or `reader`).
    #[arg(long)]
    role: Option<String>,

    /// Extra authority, e.g. `CAR_READ`. Repeatable.
    #[arg(long = "authority")]
    authorities: Vec<String>,

    /// Print the full JSON response instead of the bare token.
    #[arg(long)]
    json: bool,

    /// Also print the verifying public key (hex) to stderr.
    #[arg(long)]
    public_key: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_env()?;

    let role = args
        .role
        .as_deref()
        .map(parse_role)
        .transpose()
        .with_context(|| format!("unknown role {:?}", args.role))?;

    let manager = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let issued = manager
        .issue(TokenSubject {
            username: args.user,
            role,
            authorities: args
                .authorities
                .into_iter()
                .map(|a| a.trim().to_ascii_uppercase())
                .collect::<HashSet<_>>(),
        })
        .await?;

    if args.public_key {
        eprintln!("public key: {}", manager.public_key_hex());
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&issued)?);
    } else {
        println!("{}", issued.token);
    }
    Ok(())
}
