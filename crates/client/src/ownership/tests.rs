// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use reqwest::Method;

use bggsync_core::{Attribute, CollectionIndex};

use crate::testing::ScriptedApi;

use super::*;

const COLLECTION_XML: &str = r#"<items totalitems="2">
    <item objecttype="thing" objectid="203828" subtype="boardgame" collid="125497554">
        <name sortindex="1">Underwater Cities</name>
        <privateinfo pp_currency="EUR" pricepaid="45.00" cv_currency="EUR" currvalue="50.00"
            quantity="2" acquisitiondate="2019-03-02" acquiredfrom="Spielwiesn &amp; Co"
            inventorydate="" inventorylocation="Shelf B">
            <privatecomment>Blabla</privatecomment>
        </privateinfo>
    </item>
    <item objecttype="thing" objectid="13" subtype="boardgame" collid="98765432">
        <name sortindex="1">CATAN</name>
    </item>
</items>"#;

fn collection() -> Collection {
    Collection::from_xml(COLLECTION_XML).unwrap()
}

fn decode_form(body: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}

#[tokio::test]
async fn reject_unknown_identity_without_request() {
    let api = ScriptedApi::new([]);
    let identity = Identity::new("125497554", "13");

    let err = update_quantity(&api, &collection(), &identity, 3)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotInCollection(missing) if missing == identity));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn resubmit_existing_fields_with_new_quantity() {
    let api = ScriptedApi::with_statuses([(StatusCode::OK, r#"{"html":"..."}"#)]);
    let collection = collection();
    let identity = Identity::new("125497554", "203828");

    let outcome = update_quantity(&api, &collection, &identity, 9)
        .await
        .unwrap();

    assert_eq!(StatusCode::OK, outcome.status);
    let requests = api.requests();
    assert_eq!(1, requests.len());
    assert_eq!(Method::POST, requests[0].method);
    assert_eq!("/geekcollection.php", requests[0].url.path());

    let form = decode_form(&requests[0].body);
    assert_eq!("9", form["quantity"]);
    let index = CollectionIndex::new(&collection);
    let record = index.get(&identity).unwrap();
    for (field, attribute) in [
        ("collid", Attribute::Collid),
        ("objectid", Attribute::Objectid),
        ("pricepaid", Attribute::Pricepaid),
        ("currvalue", Attribute::Currvalue),
        ("acquisitiondate", Attribute::Acquisitiondate),
        ("acquiredfrom", Attribute::Acquiredfrom),
        ("invlocation", Attribute::Invlocation),
        ("pp_currency", Attribute::PpCurrency),
        ("privatecomment", Attribute::Privatecomment),
    ] {
        assert_eq!(record.extract(attribute), form[field], "{field}");
    }
    assert_eq!("Spielwiesn & Co", form["acquiredfrom"]);
    assert_eq!("ownership", form["fieldname"]);
    assert_eq!("thing", form["objecttype"]);
    assert_eq!("Cancel", form["B1"]);
    assert_eq!("1", form["ajax"]);
    assert_eq!("savedata", form["action"]);
    assert_eq!("", form["dateinput"]);
    assert_eq!("", form["invdate"]);
    assert_eq!("", form["cv_currency"]);
}

#[tokio::test]
async fn report_rejected_update() {
    let api = ScriptedApi::with_statuses([(StatusCode::FORBIDDEN, "Not logged in")]);
    let identity = Identity::new("98765432", "13");

    let err = update_quantity(&api, &collection(), &identity, 1)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::UpdateRejected { status, ref body }
            if status == StatusCode::FORBIDDEN && body == "Not logged in"
    ));
}
