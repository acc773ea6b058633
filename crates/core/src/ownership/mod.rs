// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The form for editing the ownership details of a collection entry.
//!
//! The remote service replaces *all* ownership fields on every edit.
//! Fields that are not submitted are reset. The form therefore always
//! carries the current values of the existing record and only replaces
//! what is supposed to change.

use serde::Serialize;

use crate::{
    Result,
    index::Identity,
    record::{Attribute, Record},
};

const FIELD_NAME: &str = "ownership";

const OBJECT_TYPE: &str = "thing";

// The remote UI submits this value for the unused cancel button
const BUTTON: &str = "Cancel";

const ACTION: &str = "savedata";

/// Fields in the order expected by the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipForm {
    fieldname: &'static str,
    pub collid: String,
    objecttype: &'static str,
    pub objectid: String,
    pub pricepaid: String,
    pub currvalue: String,
    pub quantity: String,
    pub acquisitiondate: String,
    dateinput: &'static str,
    pub acquiredfrom: String,
    invdate: &'static str,
    pub invlocation: String,
    #[serde(rename = "B1")]
    button: &'static str,
    pub pp_currency: String,
    cv_currency: &'static str,
    pub privatecomment: String,
    ajax: u8,
    action: &'static str,
}

impl OwnershipForm {
    /// Resubmit all ownership fields of `record` unchanged.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            fieldname: FIELD_NAME,
            collid: record.extract(Attribute::Collid),
            objecttype: OBJECT_TYPE,
            objectid: record.extract(Attribute::Objectid),
            pricepaid: record.extract(Attribute::Pricepaid),
            currvalue: record.extract(Attribute::Currvalue),
            quantity: record.extract(Attribute::Quantity),
            acquisitiondate: record.extract(Attribute::Acquisitiondate),
            dateinput: "",
            acquiredfrom: record.extract(Attribute::Acquiredfrom),
            invdate: "",
            invlocation: record.extract(Attribute::Invlocation),
            button: BUTTON,
            pp_currency: record.extract(Attribute::PpCurrency),
            cv_currency: "",
            privatecomment: record.extract(Attribute::Privatecomment),
            ajax: 1,
            action: ACTION,
        }
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = quantity.into();
        self
    }

    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::new(self.collid.clone(), self.objectid.clone())
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_urlencoded(&self) -> Result<String> {
        serde_urlencoded::to_string(self).map_err(Into::into)
    }
}
