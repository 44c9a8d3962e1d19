// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use implist_core::{ImplementorEntry, ImplementorMap, ImplistError};
use implist_registry::{builtin_implementors, load_listing, Delivery, HandoffCell};
use serde::Serialize;

/// The listing file's map if a path is given, else the built-in data.
pub fn resolve_map(listing: Option<&Path>) -> Result<ImplementorMap, ImplistError> {
    match listing {
        Some(path) => load_listing(path),
        None => Ok(builtin_implementors()),
    }
}

#[derive(Debug, Serialize)]
pub struct UnitSummary {
    pub unit: String,
    pub entries: usize,
}

pub fn units(map: &ImplementorMap) -> Vec<UnitSummary> {
    map.iter()
        .map(|(unit, entries)| UnitSummary {
            unit: unit.to_string(),
            entries: entries.len(),
        })
        .collect()
}

pub fn show<'a>(
    map: &'a ImplementorMap,
    unit: &str,
) -> Result<&'a [ImplementorEntry], ImplistError> {
    map.get(unit).ok_or_else(|| ImplistError::UnitNotFound {
        unit: unit.to_string(),
    })
}

/// Outcome of a `deliver` run.
#[derive(Debug, Serialize)]
pub struct DeliveryReport {
    pub order: &'static str,
    /// Which call performed the delivery: "publish" or "install".
    pub delivered_by: &'static str,
    pub units: usize,
    pub entries: usize,
}

/// Drive one hand-off on `cell` in the requested load order.
pub fn deliver(
    cell: &HandoffCell,
    map: ImplementorMap,
    consumer_first: bool,
) -> Result<DeliveryReport, ImplistError> {
    let received: Arc<OnceLock<Arc<ImplementorMap>>> = Arc::new(OnceLock::new());
    let sink = Arc::clone(&received);
    let consumer = move |map: Arc<ImplementorMap>| {
        let _ = sink.set(map);
    };

    let (order, delivered_by) = if consumer_first {
        cell.install_consumer(consumer);
        ("consumer-first", cell.publish(map))
    } else {
        cell.publish(map);
        ("data-first", cell.install_consumer(consumer))
    };

    let delivered_by = match (consumer_first, delivered_by) {
        (true, Delivery::Delivered) => "publish",
        (false, Delivery::Delivered) => "install",
        (_, other) => {
            return Err(ImplistError::Internal(format!(
                "hand-off did not deliver ({other}), cell is {}",
                cell.phase()
            )));
        }
    };

    let map = received
        .get()
        .ok_or_else(|| ImplistError::Internal("consumer was not invoked".to_string()))?;
    Ok(DeliveryReport {
        order,
        delivered_by,
        units: map.len(),
        entries: map.entry_count(),
    })
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ImplistError> {
    serde_json::to_string_pretty(value).map_err(|e| ImplistError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_include_empty_unit() {
        let summaries = units(&builtin_implementors());
        let script = summaries.iter().find(|s| s.unit == "script").unwrap();
        assert_eq!(script.entries, 0);
    }

    #[test]
    fn show_unknown_unit_errors() {
        let err = show(&builtin_implementors(), "nope").unwrap_err();
        assert!(matches!(err, ImplistError::UnitNotFound { ref unit } if unit == "nope"));
    }

    #[test]
    fn deliver_consumer_first_delivers_on_publish() {
        let cell = HandoffCell::new();
        let report = deliver(&cell, builtin_implementors(), true).unwrap();
        assert_eq!(report.order, "consumer-first");
        assert_eq!(report.delivered_by, "publish");
        assert_eq!(report.units, 6);
    }

    #[test]
    fn deliver_data_first_delivers_on_install() {
        let cell = HandoffCell::new();
        let map = builtin_implementors();
        let entries = map.entry_count();
        let report = deliver(&cell, map, false).unwrap();
        assert_eq!(report.delivered_by, "install");
        assert_eq!(report.entries, entries);
    }

    #[test]
    fn deliver_on_used_cell_reports_internal_error() {
        let cell = HandoffCell::new();
        deliver(&cell, builtin_implementors(), true).unwrap();
        let err = deliver(&cell, builtin_implementors(), true).unwrap_err();
        assert!(err.to_string().contains("did not deliver"));
    }

    #[test]
    fn resolve_map_reads_listing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("implementors.json");
        std::fs::write(&path, r#"{ "script": [] }"#).unwrap();

        let map = resolve_map(Some(&path)).unwrap();
        assert_eq!(map.len(), 1);
        assert!(resolve_map(None).unwrap().contains_unit("chain"));
    }
}
