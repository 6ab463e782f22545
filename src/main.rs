use anyhow::Result;
use inbox_assistant::cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    cli::run().await
}
