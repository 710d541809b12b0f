//! Wire and domain models for tracking lookups.
//!
//! `LinketrackResponse` mirrors the provider's JSON field names; `Tracked`
//! is the normalized shape callers work with. Conversion is pure and total
//! over well-formed provider JSON.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::datetime;

/// Raw tracking event exactly as the provider returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct LinketrackEvent {
    /// Event date, `DD/MM/YYYY`.
    #[serde(default)]
    pub data: String,
    /// Event hour, `HH:MM`.
    #[serde(default)]
    pub hora: String,
    #[serde(default)]
    pub local: String,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "subStatus", default)]
    pub sub_status: Vec<String>,
}

/// Raw response in the provider's wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct LinketrackResponse {
    pub codigo: String,
    #[serde(default)]
    pub servico: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub quantidade: u32,
    #[serde(default)]
    pub eventos: Vec<LinketrackEvent>,
    #[serde(default)]
    pub time: u64,
    /// Timestamp of the most recent event; absent when there are no events.
    #[serde(default)]
    pub ultimo: Option<String>,
}

/// A single normalized tracking event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackedEvent {
    pub timestamp: DateTime<Local>,
    pub location: String,
    pub status: String,
    pub sub_statuses: Vec<String>,
}

impl From<LinketrackEvent> for TrackedEvent {
    fn from(wire: LinketrackEvent) -> Self {
        Self {
            timestamp: datetime::combine_date_time(&wire.data, &wire.hora),
            location: wire.local,
            status: wire.status,
            sub_statuses: wire.sub_status,
        }
    }
}

/// Normalized result of one tracking lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tracked {
    pub code: String,
    pub service: String,
    pub host: String,
    pub event_count: u32,
    /// Events in provider order, newest first.
    pub events: Vec<TrackedEvent>,
    pub time: u64,
    /// Falls back to the conversion time when the provider sends nothing.
    pub last_event: DateTime<Local>,
}

impl Tracked {
    /// The most recent event, if any.
    pub fn latest_event(&self) -> Option<&TrackedEvent> {
        self.events.first()
    }
}

impl From<LinketrackResponse> for Tracked {
    fn from(wire: LinketrackResponse) -> Self {
        let last_event = wire
            .ultimo
            .as_deref()
            .and_then(datetime::parse_provider_timestamp)
            .unwrap_or_else(Local::now);

        Self {
            code: wire.codigo,
            service: wire.servico,
            host: wire.host,
            event_count: wire.quantidade,
            events: wire.eventos.into_iter().map(TrackedEvent::from).collect(),
            time: wire.time,
            last_event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn sample_wire() -> LinketrackResponse {
        serde_json::from_str(
            r#"{
                "codigo": "LX002249507BR",
                "servico": "PAC - Encomenda Econômica",
                "host": "sro",
                "quantidade": 2,
                "eventos": [
                    {
                        "data": "22/11/2021",
                        "hora": "09:15",
                        "local": "Curitiba / PR",
                        "status": "Objeto em trânsito",
                        "subStatus": ["Origem: Agência Curitiba", "Destino: Unidade São Paulo"]
                    },
                    {
                        "data": "21/11/2021",
                        "hora": "14:30",
                        "local": "Curitiba / PR",
                        "status": "Objeto postado",
                        "subStatus": []
                    }
                ],
                "time": 123,
                "ultimo": "22/11/2021 09:15"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_adapt_passes_scalar_fields_through() {
        let tracked = Tracked::from(sample_wire());
        assert_eq!(tracked.code, "LX002249507BR");
        assert_eq!(tracked.service, "PAC - Encomenda Econômica");
        assert_eq!(tracked.host, "sro");
        assert_eq!(tracked.event_count, 2);
        assert_eq!(tracked.time, 123);
    }

    #[test]
    fn test_adapt_combines_event_timestamps() {
        let tracked = Tracked::from(sample_wire());
        assert_eq!(tracked.events.len(), 2);

        let first = &tracked.events[0];
        assert_eq!(first.location, "Curitiba / PR");
        assert_eq!(first.status, "Objeto em trânsito");
        assert_eq!(first.sub_statuses.len(), 2);
        assert_eq!(
            (first.timestamp.year(), first.timestamp.month(), first.timestamp.day()),
            (2021, 11, 22)
        );
        assert_eq!((first.timestamp.hour(), first.timestamp.minute()), (9, 15));
    }

    #[test]
    fn test_adapt_parses_last_event() {
        let tracked = Tracked::from(sample_wire());
        assert_eq!(
            (tracked.last_event.year(), tracked.last_event.month(), tracked.last_event.day()),
            (2021, 11, 22)
        );
    }

    #[test]
    fn test_adapt_defaults_last_event_to_now_when_absent() {
        let mut wire = sample_wire();
        wire.ultimo = None;
        let tracked = Tracked::from(wire);
        let delta = (Local::now() - tracked.last_event).num_seconds().abs();
        assert!(delta < 5);
    }

    #[test]
    fn test_adapt_event_with_garbled_date_uses_now() {
        let mut wire = sample_wire();
        wire.eventos[0].data = "soon".to_string();
        let tracked = Tracked::from(wire);
        let delta = (Local::now() - tracked.events[0].timestamp).num_seconds().abs();
        assert!(delta < 5);
    }

    #[test]
    fn test_deserialize_minimal_response() {
        // Provider omits everything optional for an unregistered code.
        let wire: LinketrackResponse = serde_json::from_str(r#"{"codigo":"LX002249507BR"}"#).unwrap();
        assert_eq!(wire.quantidade, 0);
        assert!(wire.eventos.is_empty());
        assert!(wire.ultimo.is_none());

        let tracked = Tracked::from(wire);
        assert!(tracked.events.is_empty());
        assert!(tracked.latest_event().is_none());
    }

    #[test]
    fn test_latest_event_is_first() {
        let tracked = Tracked::from(sample_wire());
        let latest = tracked.latest_event().unwrap();
        assert_eq!(latest.status, "Objeto em trânsito");
    }
}
