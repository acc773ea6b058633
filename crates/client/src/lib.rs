// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Client for the private collection of a `BoardGameGeek` user.
//!
//! All requests of a unit of work share a single [`Session`]. A session
//! is not meant to be shared between concurrent units of work because
//! they would race on the authentication cookies.

use std::result::Result as StdResult;

use reqwest::StatusCode;
use thiserror::Error;

use bggsync_core::Identity;

pub mod collection;
pub use self::collection::load_collection;

pub mod config;
pub use self::config::{CollectionConfig, Credentials, ServiceConfig};

pub mod ownership;
pub use self::ownership::{UpdateOutcome, update_quantity};

pub mod session;
pub use self::session::{Session, SessionCookies};

pub mod webapi;
pub use self::webapi::{RawResponse, WebApi};

#[cfg(test)]
mod testing;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),

    #[error("login rejected: {status}")]
    LoginRejected { status: StatusCode },

    #[error("error loading collection: {status}")]
    CollectionLoad { status: StatusCode },

    #[error("collection not ready after {attempts} attempt(s)")]
    CollectionLoadTimeout { attempts: u32 },

    #[error("object not in collection: {0}")]
    NotInCollection(Identity),

    #[error("update rejected: {status}")]
    UpdateRejected { status: StatusCode, body: String },

    #[error(transparent)]
    Record(#[from] bggsync_core::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, Error>;

pub mod prelude {
    pub use super::{Error, Result};
}
