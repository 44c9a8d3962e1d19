// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in implementor data.
//!
//! Returns the hardcoded implementor listing for the documented units of the
//! node workspace. No files are read. Units without known implementors are
//! still present, mapped to an empty sequence.

use implist_core::{ImplementorEntry, ImplementorMap};

const SERIALIZABLE: (&str, &str) = ("Serializable", "serialization/trait.Serializable.html");
const DESERIALIZABLE: (&str, &str) = ("Deserializable", "serialization/trait.Deserializable.html");
const HEADER_PROVIDER: (&str, &str) = ("BlockHeaderProvider", "storage/trait.BlockHeaderProvider.html");
const OUTPUT_PROVIDER: (&str, &str) = (
    "TransactionOutputProvider",
    "storage/trait.TransactionOutputProvider.html",
);
const DEBUG: (&str, &str) = ("Debug", "https://doc.rust-lang.org/nightly/core/fmt/trait.Debug.html");
const PARTIAL_EQ: (&str, &str) = (
    "PartialEq",
    "https://doc.rust-lang.org/nightly/core/cmp/trait.PartialEq.html",
);

fn implementor(tr: (&str, &str), type_name: &str, type_href: &str) -> ImplementorEntry {
    ImplementorEntry::new(tr.0, tr.1, type_name, type_href)
}

/// Returns the implementor map for all built-in library units.
///
/// Units covered:
/// - chain
/// - primitives
/// - script (no implementors)
/// - serialization
/// - storage
/// - verification
pub fn builtin_implementors() -> ImplementorMap {
    ImplementorMap::builder()
        .entries(
            "chain",
            [
                implementor(SERIALIZABLE, "Block", "chain/struct.Block.html"),
                implementor(SERIALIZABLE, "BlockHeader", "chain/struct.BlockHeader.html"),
                implementor(SERIALIZABLE, "Transaction", "chain/struct.Transaction.html"),
                implementor(DESERIALIZABLE, "Block", "chain/struct.Block.html"),
                implementor(DESERIALIZABLE, "BlockHeader", "chain/struct.BlockHeader.html"),
                implementor(DESERIALIZABLE, "Transaction", "chain/struct.Transaction.html"),
                implementor(OUTPUT_PROVIDER, "IndexedBlock", "chain/struct.IndexedBlock.html"),
            ],
        )
        .entries(
            "primitives",
            [
                implementor(SERIALIZABLE, "H256", "primitives/hash/struct.H256.html"),
                implementor(DESERIALIZABLE, "H256", "primitives/hash/struct.H256.html"),
                implementor(SERIALIZABLE, "Bytes", "primitives/bytes/struct.Bytes.html"),
                implementor(DESERIALIZABLE, "Bytes", "primitives/bytes/struct.Bytes.html"),
            ],
        )
        .unit("script")
        .entries(
            "serialization",
            [
                implementor(SERIALIZABLE, "CompactInteger", "serialization/struct.CompactInteger.html"),
                implementor(DESERIALIZABLE, "CompactInteger", "serialization/struct.CompactInteger.html"),
            ],
        )
        .entries(
            "storage",
            [
                implementor(HEADER_PROVIDER, "BlockChainDatabase", "db/struct.BlockChainDatabase.html"),
                implementor(OUTPUT_PROVIDER, "BlockChainDatabase", "db/struct.BlockChainDatabase.html"),
            ],
        )
        .entries(
            "verification",
            [
                implementor(OUTPUT_PROVIDER, "NoopStore", "verification/struct.NoopStore.html"),
                implementor(
                    OUTPUT_PROVIDER,
                    "DuplexTransactionOutputProvider",
                    "verification/struct.DuplexTransactionOutputProvider.html",
                ),
                implementor(DEBUG, "Error", "verification/enum.Error.html"),
                implementor(PARTIAL_EQ, "Error", "verification/enum.Error.html"),
                implementor(DEBUG, "TransactionError", "verification/enum.TransactionError.html"),
                implementor(
                    PARTIAL_EQ,
                    "TransactionError",
                    "verification/enum.TransactionError.html",
                ),
            ],
        )
        .build()
}

/// Search a map by query string.
///
/// Keeps entries whose trait or implementor name contains the query
/// (case-insensitive), grouped by unit in render order. Units left without a
/// match are omitted. An empty query returns the map unchanged.
pub fn search_implementors(map: &ImplementorMap, query: &str) -> ImplementorMap {
    if query.is_empty() {
        return map.clone();
    }
    let query_lower = query.to_lowercase();
    map.iter()
        .fold(ImplementorMap::builder(), |builder, (unit, entries)| {
            let matches: Vec<ImplementorEntry> = entries
                .iter()
                .filter(|e| {
                    e.trait_ref.name.to_lowercase().contains(&query_lower)
                        || e.implementor.name.to_lowercase().contains(&query_lower)
                })
                .cloned()
                .collect();
            if matches.is_empty() {
                builder
            } else {
                builder.entries(unit.clone(), matches)
            }
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_six_units() {
        let map = builtin_implementors();
        let units: Vec<&str> = map.units().map(|u| u.as_str()).collect();
        assert_eq!(
            units,
            vec!["chain", "primitives", "script", "serialization", "storage", "verification"]
        );
    }

    #[test]
    fn builtin_empty_unit_is_present() {
        let map = builtin_implementors();
        assert_eq!(map.get("script"), Some(&[][..]));
    }

    #[test]
    fn builtin_is_stable_across_calls() {
        assert_eq!(builtin_implementors(), builtin_implementors());
    }

    #[test]
    fn builtin_render_order_matches_literal() {
        let map = builtin_implementors();
        let chain = map.get("chain").unwrap();
        assert_eq!(chain[0].trait_ref.name, "Serializable");
        assert_eq!(chain[0].implementor.name, "Block");
        assert_eq!(chain[6].implementor.name, "IndexedBlock");
    }

    #[test]
    fn search_finds_by_implementor_name() {
        let found = search_implementors(&builtin_implementors(), "noopstore");
        assert_eq!(found.len(), 1);
        let entries = found.get("verification").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].trait_ref.name, "TransactionOutputProvider");
    }

    #[test]
    fn search_finds_by_trait_name_across_units() {
        let found = search_implementors(&builtin_implementors(), "OutputProvider");
        assert_eq!(found.entry_count(), 4);
        assert!(found.contains_unit("chain"));
        assert!(found.contains_unit("storage"));
        assert!(found.contains_unit("verification"));
        assert!(!found.contains_unit("script"));
    }

    #[test]
    fn search_empty_returns_all() {
        let map = builtin_implementors();
        assert_eq!(search_implementors(&map, ""), map);
    }

    #[test]
    fn search_no_match() {
        let found = search_implementors(&builtin_implementors(), "xyz_nonexistent");
        assert!(found.is_empty());
    }
}
