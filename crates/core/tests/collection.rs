// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use bggsync_core::{Attribute, Collection, CollectionIndex, Identity, OwnershipForm};

const COLLECTION_XML: &str = include_str!("collection.xml");

fn sample_collection() -> Collection {
    Collection::from_xml(COLLECTION_XML).unwrap()
}

#[test]
fn parse_all_items() {
    assert_eq!(3, sample_collection().len());
}

#[test]
fn index_without_losing_entries() {
    let collection = sample_collection();
    let index = CollectionIndex::new(&collection);
    assert_eq!(collection.len(), index.len());
    assert_eq!(0, index.duplicates());
    // Two copies of the same game are distinguished by their collection id
    assert!(index.contains(&Identity::new("98765432", "13")));
    assert!(index.contains(&Identity::new("98765433", "13")));
}

#[test]
fn extract_version_details() {
    let collection = sample_collection();
    let index = CollectionIndex::new(&collection);
    let record = index.get(&Identity::new("125497554", "203828")).unwrap();
    assert_eq!("Underwater Cities", record.extract(Attribute::Title));
    assert_eq!("2018", record.extract(Attribute::VersionYearpublished));
    assert_eq!(
        "Frosted Games, Pegasus Spiele",
        record.extract(Attribute::VersionPublishers)
    );
    assert_eq!("Blabla", record.extract(Attribute::Privatecomment));
    assert_eq!("Shelf B", record.extract(Attribute::Invlocation));

    let record = index.get(&Identity::new("98765432", "13")).unwrap();
    assert_eq!("2015", record.extract(Attribute::VersionYearpublished));
    assert_eq!("KOSMOS", record.extract(Attribute::VersionPublishers));
}

#[test]
fn extract_from_entry_without_version_or_private_info() {
    let collection = sample_collection();
    let index = CollectionIndex::new(&collection);
    let record = index.get(&Identity::new("98765433", "13")).unwrap();
    assert_eq!("CATAN", record.extract(Attribute::Title));
    assert_eq!("", record.extract(Attribute::VersionYearpublished));
    assert_eq!("", record.extract(Attribute::VersionPublishers));
    assert_eq!("", record.extract(Attribute::Quantity));
    assert_eq!("", record.extract(Attribute::Privatecomment));
}

#[test]
fn ownership_form_from_parsed_record() {
    let collection = sample_collection();
    let index = CollectionIndex::new(&collection);
    let record = index.get(&Identity::new("125497554", "203828")).unwrap();
    let form = OwnershipForm::from_record(record).with_quantity("3");
    assert_eq!("3", form.quantity);
    assert_eq!("45.00", form.pricepaid);
    assert_eq!("Spielwiesn", form.acquiredfrom);
    assert_eq!("Blabla", form.privatecomment);
}

#[test]
fn collection_serializes_as_json_sequence() {
    let collection = sample_collection();
    let json = serde_json::to_value(&collection).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(3, items.len());
    assert_eq!("203828", items[0]["@objectid"]);
    assert_eq!("Underwater Cities", items[0]["name"]["#text"]);
}
