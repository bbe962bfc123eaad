//! tguard - review authenticity and product trust scores from the terminal.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    trustguard_cli::run().await
}
