// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Records of a `BoardGameGeek` collection and everything that can be
//! derived from them without talking to the remote service.

use std::result::Result as StdResult;

use thiserror::Error;

pub mod index;
pub use self::index::{CollectionIndex, Identity};

pub mod ownership;
pub use self::ownership::OwnershipForm;

pub mod record;
pub use self::record::{Attribute, Collection, Extractor, Record, extract};

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("malformed document: {0}")]
    Shape(String),

    #[error(transparent)]
    Encode(#[from] serde_urlencoded::ser::Error),
}

pub type Result<T> = StdResult<T, Error>;

pub mod prelude {
    pub use super::{Error, Result};
}
