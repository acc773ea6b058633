// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::slice;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

mod xml;

/// A single entry of a collection.
///
/// The tree follows the conventions of the XML conversion: attributes
/// are stored as `@name`, the text of an element that also carries
/// attributes or children as `#text`. Repeated child elements
/// turn into sequences.
///
/// Records are never edited. Changes are submitted as an
/// [`OwnershipForm`](crate::OwnershipForm) instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    #[must_use]
    pub fn extract(&self, attribute: Attribute) -> String {
        attribute.extractor().extract(self)
    }

    /// Resolve a `/`-delimited path.
    ///
    /// Every intermediate segment must resolve to a mapping and the
    /// final segment to a scalar. Otherwise the result is empty.
    #[must_use]
    pub fn lookup_path(&self, path: &str) -> String {
        let mut segments = path.split('/');
        let Some(last) = segments.next_back() else {
            return String::new();
        };
        let mut fields = &self.0;
        for segment in segments {
            match fields.get(segment) {
                Some(Value::Object(nested)) => fields = nested,
                _ => return String::new(),
            }
        }
        fields.get(last).map(scalar_text).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(from: Map<String, Value>) -> Self {
        Self::new(from)
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// All records of a single fetch, in the order of the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection(Vec<Record>);

impl Collection {
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self(records)
    }

    /// Convert an XML collection export.
    ///
    /// A document without any `item` elements results in an empty
    /// collection.
    pub fn from_xml(xml: &str) -> crate::Result<Self> {
        xml::parse_collection(xml)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Record] {
        &self.0
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Named fields that could be extracted from a [`Record`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
    Collid,
    Objectid,
    Title,
    VersionYearpublished,
    VersionPublishers,
    Pricepaid,
    Currvalue,
    Quantity,
    Acquisitiondate,
    Acquiredfrom,
    Invlocation,
    PpCurrency,
    Privatecomment,
}

impl Attribute {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The registry of extraction rules.
    ///
    /// This is the only place that knows where a field is located
    /// within a record.
    #[must_use]
    pub fn extractor(self) -> Extractor {
        use Extractor::{Custom, Path};
        match self {
            Self::Collid => Path("@collid"),
            Self::Objectid => Path("@objectid"),
            Self::Title => Path("name/#text"),
            Self::VersionYearpublished => Path("version/item/yearpublished/@value"),
            Self::VersionPublishers => Custom(extract_version_publishers),
            Self::Pricepaid => Path("privateinfo/@pricepaid"),
            Self::Currvalue => Path("privateinfo/@currvalue"),
            Self::Quantity => Path("privateinfo/@quantity"),
            Self::Acquisitiondate => Path("privateinfo/@acquisitiondate"),
            Self::Acquiredfrom => Path("privateinfo/@acquiredfrom"),
            // The remote attribute name differs from the form field name
            Self::Invlocation => Path("privateinfo/@inventorylocation"),
            Self::PpCurrency => Path("privateinfo/@pp_currency"),
            Self::Privatecomment => Path("privateinfo/privatecomment"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Extractor {
    Path(&'static str),
    Custom(fn(&Record) -> String),
}

impl Extractor {
    #[must_use]
    pub fn extract(self, record: &Record) -> String {
        match self {
            Self::Path(path) => record.lookup_path(path),
            Self::Custom(extract) => extract(record),
        }
    }
}

/// Extract the value of an attribute, empty if absent.
#[must_use]
pub fn extract(attribute: Attribute, record: &Record) -> String {
    record.extract(attribute)
}

const PUBLISHER_LINK_TYPE: &str = "boardgamepublisher";

const PUBLISHER_SEPARATOR: &str = ", ";

fn extract_version_publishers(record: &Record) -> String {
    let links = record
        .fields()
        .get("version")
        .and_then(Value::as_object)
        .and_then(|version| version.get("item"))
        .and_then(Value::as_object)
        .and_then(|item| item.get("link"));
    let links = match links {
        Some(Value::Array(links)) => links.as_slice(),
        // A single link is not wrapped into a sequence
        Some(link @ Value::Object(_)) => slice::from_ref(link),
        _ => &[],
    };
    links
        .iter()
        .filter_map(Value::as_object)
        .filter(|link| link.get("@type").and_then(Value::as_str) == Some(PUBLISHER_LINK_TYPE))
        .filter_map(|link| link.get("@value").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join(PUBLISHER_SEPARATOR)
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
