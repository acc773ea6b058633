// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::record::{Attribute, Collection, Record};

/// Identifies an entry within a collection.
///
/// Both components are opaque and assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity {
    pub collid: String,
    pub objectid: String,
}

impl Identity {
    #[must_use]
    pub fn new(collid: impl Into<String>, objectid: impl Into<String>) -> Self {
        Self {
            collid: collid.into(),
            objectid: objectid.into(),
        }
    }

    #[must_use]
    pub fn of(record: &Record) -> Self {
        Self {
            collid: record.extract(Attribute::Collid),
            objectid: record.extract(Attribute::Objectid),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { collid, objectid } = self;
        write!(f, "({collid}, {objectid})")
    }
}

/// Lookup of records by [`Identity`].
#[derive(Debug, Clone, Default)]
pub struct CollectionIndex<'a> {
    records: HashMap<Identity, &'a Record>,
    duplicates: usize,
}

impl<'a> CollectionIndex<'a> {
    /// Index all records of a collection.
    ///
    /// If multiple records share the same identity the last one wins.
    /// The number of replaced records is available as [`Self::duplicates()`].
    #[must_use]
    pub fn new(collection: &'a Collection) -> Self {
        let mut records = HashMap::with_capacity(collection.len());
        let mut duplicates = 0;
        for record in collection {
            let identity = Identity::of(record);
            if records.insert(identity, record).is_some() {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            log::warn!(
                "Found {duplicates} duplicate identities among {} record(s)",
                collection.len()
            );
        }
        Self {
            records,
            duplicates,
        }
    }

    #[must_use]
    pub fn get(&self, identity: &Identity) -> Option<&'a Record> {
        self.records.get(identity).copied()
    }

    #[must_use]
    pub fn contains(&self, identity: &Identity) -> bool {
        self.records.contains_key(identity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub const fn duplicates(&self) -> usize {
        self.duplicates
    }
}
