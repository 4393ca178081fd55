use std::io;
use std::time::Duration;

use phonenumber::country;
use textlocal::{
    DEFAULT_BASE_URL, MessageText, PhoneNumber, RawPhoneNumber, SendMessage, SenderName,
    TextlocalClient,
};
use tracing_subscriber::EnvFilter;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required("TEXTLOCAL_API_KEY")?;
    let phones = required("TEXTLOCAL_NUMBERS")?;
    let sender = std::env::var("TEXTLOCAL_SENDER").unwrap_or_else(|_| "TXTLCL".to_owned());
    let message = std::env::var("TEXTLOCAL_MESSAGE")
        .unwrap_or_else(|_| "Hello from the textlocal demo.".to_owned());

    // Numbers without a country prefix are read as UK numbers.
    let recipients = phones
        .split(',')
        .map(|raw| PhoneNumber::parse(Some(country::Id::GB), raw).map(RawPhoneNumber::from))
        .collect::<Result<Vec<_>, _>>()?;

    let client = TextlocalClient::builder(DEFAULT_BASE_URL, api_key)
        .timeout(Duration::from_secs(30))
        .user_agent("textlocal-demos")
        .build()?;
    let request = SendMessage::new(
        recipients,
        MessageText::new(message)?,
        SenderName::new(sender)?,
    )?;

    client.send_message(request).await?;
    println!("message accepted by the gateway");

    Ok(())
}
