// SPDX-FileCopyrightText: 2026 Implist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Implementor map model.
//!
//! An [`ImplementorMap`] is assembled once through [`ImplementorMapBuilder`]
//! and is read-only afterwards. Entries inside a unit keep the order they
//! were added in, which is the order a consumer renders them.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Identifier of one documented library unit (e.g., "chain", "verification").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryUnitId(pub String);

impl LibraryUnitId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryUnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LibraryUnitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for LibraryUnitId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for LibraryUnitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A display name paired with the locator it links to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    /// Name shown to the reader (e.g., "Debug").
    pub name: String,
    /// Link target (e.g., "core/fmt/trait.Debug.html").
    pub href: String,
}

impl ItemRef {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// One (trait, implementing type) pair listed under a library unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImplementorEntry {
    /// The implemented trait.
    pub trait_ref: ItemRef,
    /// The concrete type implementing it.
    pub implementor: ItemRef,
}

impl ImplementorEntry {
    pub fn new(
        trait_name: impl Into<String>,
        trait_href: impl Into<String>,
        type_name: impl Into<String>,
        type_href: impl Into<String>,
    ) -> Self {
        Self {
            trait_ref: ItemRef::new(trait_name, trait_href),
            implementor: ItemRef::new(type_name, type_href),
        }
    }
}

/// What a hand-off cell does with a map published after it already delivered one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RepublishPolicy {
    /// Drop the late map; the consumer keeps what it already received.
    #[default]
    Ignore,
    /// Hand the late map to the installed consumer as well.
    Redeliver,
}

/// Library unit -> ordered implementor entries.
///
/// There are no mutating methods; a map that has been handed to a consumer
/// reads back exactly as it was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorMap {
    units: BTreeMap<LibraryUnitId, Vec<ImplementorEntry>>,
}

impl ImplementorMap {
    /// Start assembling a new map.
    pub fn builder() -> ImplementorMapBuilder {
        ImplementorMapBuilder::default()
    }

    /// Entries of `unit` in render order, or `None` if the unit is unknown.
    ///
    /// A known unit without implementors yields `Some(&[])`.
    pub fn get(&self, unit: &str) -> Option<&[ImplementorEntry]> {
        self.units.get(unit).map(Vec::as_slice)
    }

    pub fn contains_unit(&self, unit: &str) -> bool {
        self.units.contains_key(unit)
    }

    /// Unit identifiers in sorted order.
    pub fn units(&self) -> impl Iterator<Item = &LibraryUnitId> {
        self.units.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LibraryUnitId, &[ImplementorEntry])> {
        self.units.iter().map(|(unit, entries)| (unit, entries.as_slice()))
    }

    /// Number of units, including units with no entries.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Total number of entries across all units.
    pub fn entry_count(&self) -> usize {
        self.units.values().map(Vec::len).sum()
    }

    /// Every entry implementing the trait named `trait_name`, grouped by unit
    /// and kept in render order.
    pub fn implementors_of(&self, trait_name: &str) -> Vec<(&LibraryUnitId, &ImplementorEntry)> {
        self.units
            .iter()
            .flat_map(|(unit, entries)| entries.iter().map(move |entry| (unit, entry)))
            .filter(|(_, entry)| entry.trait_ref.name == trait_name)
            .collect()
    }
}

impl<'a> IntoIterator for &'a ImplementorMap {
    type Item = (&'a LibraryUnitId, &'a Vec<ImplementorEntry>);
    type IntoIter = std::collections::btree_map::Iter<'a, LibraryUnitId, Vec<ImplementorEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Assembles an [`ImplementorMap`].
#[derive(Debug, Default)]
pub struct ImplementorMapBuilder {
    units: BTreeMap<LibraryUnitId, Vec<ImplementorEntry>>,
}

impl ImplementorMapBuilder {
    /// Declare a unit. It is present in the built map even if no entry is
    /// ever added to it. Declaring a unit again keeps its entries.
    pub fn unit(mut self, unit: impl Into<LibraryUnitId>) -> Self {
        self.units.entry(unit.into()).or_default();
        self
    }

    /// Append `entry` to `unit`, declaring the unit if needed.
    pub fn entry(mut self, unit: impl Into<LibraryUnitId>, entry: ImplementorEntry) -> Self {
        self.units.entry(unit.into()).or_default().push(entry);
        self
    }

    /// Append several entries to `unit` in order.
    pub fn entries(
        mut self,
        unit: impl Into<LibraryUnitId>,
        entries: impl IntoIterator<Item = ImplementorEntry>,
    ) -> Self {
        self.units.entry(unit.into()).or_default().extend(entries);
        self
    }

    pub fn build(self) -> ImplementorMap {
        ImplementorMap { units: self.units }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn debug_entry(type_name: &str) -> ImplementorEntry {
        ImplementorEntry::new(
            "Debug",
            "core/fmt/trait.Debug.html",
            type_name,
            format!("chain/struct.{type_name}.html"),
        )
    }

    #[test]
    fn declared_unit_without_entries_is_present_and_empty() {
        let map = ImplementorMap::builder().unit("script").build();
        assert!(map.contains_unit("script"));
        assert_eq!(map.get("script"), Some(&[][..]));
        assert_eq!(map.get("absent"), None);
    }

    #[test]
    fn entries_keep_insertion_order() {
        let map = ImplementorMap::builder()
            .entry("chain", debug_entry("Zeta"))
            .entry("chain", debug_entry("Alpha"))
            .entry("chain", debug_entry("Mid"))
            .build();

        let names: Vec<&str> = map
            .get("chain")
            .unwrap()
            .iter()
            .map(|e| e.implementor.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let map = ImplementorMap::builder()
            .entry("chain", debug_entry("Block"))
            .entry("chain", debug_entry("Block"))
            .build();
        assert_eq!(map.get("chain").unwrap().len(), 2);
    }

    #[test]
    fn redeclaring_unit_keeps_entries() {
        let map = ImplementorMap::builder()
            .entry("chain", debug_entry("Block"))
            .unit("chain")
            .build();
        assert_eq!(map.get("chain").unwrap().len(), 1);
    }

    #[test]
    fn counts_units_and_entries() {
        let map = ImplementorMap::builder()
            .entries("chain", [debug_entry("Block"), debug_entry("Transaction")])
            .unit("script")
            .build();
        assert_eq!(map.len(), 2);
        assert_eq!(map.entry_count(), 2);
        assert!(!map.is_empty());
        assert!(ImplementorMap::default().is_empty());
    }

    #[test]
    fn implementors_of_spans_units() {
        let display = ImplementorEntry::new(
            "Display",
            "core/fmt/trait.Display.html",
            "Error",
            "verification/enum.Error.html",
        );
        let map = ImplementorMap::builder()
            .entry("chain", debug_entry("Block"))
            .entry("verification", display)
            .entry("verification", debug_entry("Error"))
            .build();

        let found = map.implementors_of("Debug");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0.as_str(), "chain");
        assert_eq!(found[1].0.as_str(), "verification");
        assert_eq!(found[1].1.implementor.name, "Error");
        assert!(map.implementors_of("Hash").is_empty());
    }

    #[test]
    fn republish_policy_parses_lowercase() {
        use std::str::FromStr;

        assert_eq!(RepublishPolicy::default(), RepublishPolicy::Ignore);
        assert_eq!(
            RepublishPolicy::from_str("redeliver").unwrap(),
            RepublishPolicy::Redeliver
        );
        assert_eq!(RepublishPolicy::Ignore.to_string(), "ignore");
        let json = serde_json::to_string(&RepublishPolicy::Redeliver).unwrap();
        assert_eq!(json, "\"redeliver\"");
    }

    #[test]
    fn serializes_as_plain_object() {
        let map = ImplementorMap::builder()
            .entry("chain", debug_entry("Block"))
            .unit("script")
            .build();
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["script"], serde_json::json!([]));
        assert_eq!(json["chain"][0]["trait_ref"]["name"], "Debug");
        assert_eq!(json["chain"][0]["implementor"]["href"], "chain/struct.Block.html");
    }

    fn arb_entry() -> impl Strategy<Value = ImplementorEntry> {
        ("[A-Z][a-z]{0,8}", "[A-Z][a-zA-Z]{0,10}").prop_map(|(trait_name, type_name)| {
            ImplementorEntry::new(
                trait_name.clone(),
                format!("trait.{trait_name}.html"),
                type_name.clone(),
                format!("struct.{type_name}.html"),
            )
        })
    }

    fn arb_map() -> impl Strategy<Value = ImplementorMap> {
        prop::collection::btree_map("[a-z_]{1,10}", prop::collection::vec(arb_entry(), 0..6), 0..6)
            .prop_map(|units| {
                units
                    .into_iter()
                    .fold(ImplementorMap::builder(), |builder, (unit, entries)| {
                        builder.entries(unit, entries)
                    })
                    .build()
            })
    }

    proptest! {
        #[test]
        fn json_transit_preserves_order(map in arb_map()) {
            let json = serde_json::to_string(&map).unwrap();
            let back: ImplementorMap = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(&back, &map);
            for (unit, entries) in map.iter() {
                prop_assert_eq!(back.get(unit.as_str()).unwrap(), entries);
            }
        }
    }
}
