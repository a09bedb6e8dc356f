//! Fetch a previously submitted email by ID.
//!
//! Run with: cargo run --example fetch_email -- <email-id>

use thundermail_rs::{EmailId, ThunderMailClient};

#[tokio::main]
async fn main() -> thundermail_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let id = std::env::args()
        .nth(1)
        .expect("usage: fetch_email <email-id>");

    let client = ThunderMailClient::from_env()?;

    match client.emails().get(&EmailId::new(id)).await?.into_result() {
        Ok(email) => {
            println!("From:    {}", email.from);
            println!("To:      {}", email.to.join(", "));
            println!("Subject: {}", email.subject);
            if let Some(created_at) = email.created_at {
                println!("Sent at: {}", created_at);
            }
        }
        Err(error) => eprintln!("Lookup failed: {}", error),
    }

    Ok(())
}
