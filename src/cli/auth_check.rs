use anyhow::Result;

use crate::core::AppConfig;
use crate::graph::auth::acquire_token;

/// Exchange the configured credentials for a token and print a short
/// prefix of it. Verifies the tenant, client id, and secret without
/// writing the whole token to the terminal.
pub async fn run() -> Result<()> {
    let config = AppConfig::default();
    let token = acquire_token(&config).await?;

    let prefix: String = token.chars().take(40).collect();
    println!("✅ Token acquired: {}…", prefix);
    Ok(())
}
