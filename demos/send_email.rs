//! Send a transactional email.
//!
//! This example demonstrates how to authenticate with the ThunderMail API
//! and submit an email for delivery.
//!
//! Run with: cargo run --example send_email

use thundermail_rs::{models::SendEmailRequest, ThunderMailClient};

#[tokio::main]
async fn main() -> thundermail_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Reads THUNDERMAIL_API_KEY (and THUNDERMAIL_BASE_URL, if set)
    let client = ThunderMailClient::from_env()?;

    let email = SendEmailRequest::builder()
        .from("Tim <tim@example.com>")
        .to("a@b.com")
        .subject("hi")
        .html("<p>hi</p>")
        .text("hi")
        .build()?;

    println!("Sending email via {}...", client.base_url());

    match client.emails().send(email).await?.into_result() {
        Ok(sent) => println!("Sent! id = {}", sent.id),
        Err(error) => eprintln!("API rejected the email: {}", error),
    }

    Ok(())
}
