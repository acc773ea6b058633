// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn write_header_and_one_line_per_record() {
    let collection = Collection::from_xml(
        r#"<items>
            <item objectid="1" collid="11"><name sortindex="1">First</name><privateinfo quantity="2"/></item>
            <item objectid="2" collid="22"><name sortindex="1">Second&#9;Edition</name></item>
        </items>"#,
    )
    .unwrap();
    let mut output = Vec::new();
    write_quantities(&mut output, &collection).unwrap();
    assert_eq!(
        "collid\tobjectid\ttitle\tquantity\n11\t1\tFirst\t2\n22\t2\tSecond Edition\t\n",
        String::from_utf8(output).unwrap()
    );
}

#[test]
fn write_only_header_for_empty_collection() {
    let mut output = Vec::new();
    write_quantities(&mut output, &Collection::default()).unwrap();
    assert_eq!(
        "collid\tobjectid\ttitle\tquantity\n",
        String::from_utf8(output).unwrap()
    );
}
