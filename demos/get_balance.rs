use std::io;

use textlocal::{DEFAULT_BASE_URL, TextlocalClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("TEXTLOCAL_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTLOCAL_API_KEY environment variable is required",
        )
    })?;
    let base_url =
        std::env::var("TEXTLOCAL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());

    let client = TextlocalClient::new(base_url, api_key)?;
    let balance = client.get_balance().await?;

    println!("sms credits: {}, mms credits: {}", balance.sms, balance.mms);

    Ok(())
}
