use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod auth_check;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8000")]
        port: String,
    },
    /// Exchange the configured credentials for a token and report the result
    AuthCheck {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await;
        }
        Some(Command::AuthCheck {}) => {
            auth_check::run().await?;
        }
        // Running with no subcommand starts the server on defaults
        None => {
            serve::run(String::from("127.0.0.1"), String::from("8000")).await;
        }
    }

    Ok(())
}
