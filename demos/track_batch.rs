use std::env;
use std::time::Instant;

use anyhow::Result;
use linketrack_rs::LinketrackClient;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <codes>", args[0]);
        eprintln!("  codes: comma-separated (e.g., CODE1,CODE2,CODE3)");
        eprintln!("  Credentials come from LINKETRACK_USER and LINKETRACK_TOKEN");
        std::process::exit(1);
    }

    let codes: Vec<String> = args[1]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let user = env::var("LINKETRACK_USER").unwrap_or_default();
    let token = env::var("LINKETRACK_TOKEN").unwrap_or_default();

    let client = LinketrackClient::new(&user, &token)?;

    println!("Tracking {} package(s) sequentially...", codes.len());
    let start = Instant::now();

    // Batch tracking is sequential on purpose: results come back in request
    // order and the provider rate limit stays in sight.
    let results = client.track_all(&codes).await?;

    println!("Done in {:?}", start.elapsed());

    for tracked in &results {
        println!("\n[{}] {} ({} events)", tracked.code, tracked.service, tracked.event_count);
        if let Some(latest) = tracked.latest_event() {
            println!(
                "  Latest: {} - {}",
                latest.timestamp.format("%d/%m/%Y %H:%M"),
                latest.status
            );
        }
    }

    Ok(())
}
