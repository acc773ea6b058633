// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io;

use bggsync_core::{Attribute, Collection};

const COLUMNS: [Attribute; 4] = [
    Attribute::Collid,
    Attribute::Objectid,
    Attribute::Title,
    Attribute::Quantity,
];

const SEPARATOR: char = '\t';

/// Write one line per record with its identity, title, and quantity.
pub(crate) fn write_quantities(
    writer: &mut impl io::Write,
    collection: &Collection,
) -> io::Result<()> {
    let header = COLUMNS.map(Attribute::name).join(&SEPARATOR.to_string());
    writeln!(writer, "{header}")?;
    for record in collection {
        let row = COLUMNS
            .map(|attribute| sanitize_cell(&record.extract(attribute)))
            .join(&SEPARATOR.to_string());
        writeln!(writer, "{row}")?;
    }
    Ok(())
}

fn sanitize_cell(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

#[cfg(test)]
mod tests;
