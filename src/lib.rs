//! Client library for the Link & Track (linketrack.com) parcel-tracking API,
//! which fronts the Brazilian Correios tracking service.
//!
//! ```no_run
//! use linketrack_rs::LinketrackClient;
//!
//! # async fn run() -> Result<(), linketrack_rs::LinketrackError> {
//! let client = LinketrackClient::new("myuser", &"0".repeat(64))?;
//! let tracked = client.track("LX002249507BR").await?;
//! println!("{} events for {}", tracked.event_count, tracked.code);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod datetime;
pub mod error;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::{LinketrackClient, LinketrackConfig};
pub use error::LinketrackError;
pub use transport::{HttpTransport, RawResponse, Transport};
pub use types::{LinketrackEvent, LinketrackResponse, Tracked, TrackedEvent};
pub use validate::is_valid_code;
