use std::env;

use anyhow::Result;
use linketrack_rs::LinketrackClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <tracking_code>", args[0]);
        eprintln!("  Credentials come from LINKETRACK_USER and LINKETRACK_TOKEN");
        std::process::exit(1);
    }

    let user = env::var("LINKETRACK_USER").unwrap_or_default();
    let token = env::var("LINKETRACK_TOKEN").unwrap_or_default();

    let client = LinketrackClient::new(&user, &token)?;
    let tracked = client.track(&args[1]).await?;

    println!("Tracking: {}", tracked.code);
    println!("Service:  {}", tracked.service);
    println!("Events:   {}", tracked.event_count);

    for event in &tracked.events {
        println!("\n  {} - {}", event.timestamp.format("%d/%m/%Y %H:%M"), event.status);
        if !event.location.is_empty() {
            println!("  Location: {}", event.location);
        }
        for sub in &event.sub_statuses {
            println!("    {}", sub);
        }
    }

    Ok(())
}
