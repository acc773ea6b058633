// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{fmt, num::NonZeroU32, time::Duration};

use serde::{Deserialize, Serialize};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://boardgamegeek.com/";

pub const DEFAULT_COLLECTION_OWNER: &str = "SpielwiesnSpiele";

const DEFAULT_POLL_INTERVAL_MILLIS: u64 = 1_000;

const DEFAULT_MAX_POLL_ATTEMPTS: NonZeroU32 = NonZeroU32::new(60).unwrap();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: Url,
    pub collection: CollectionConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: Default::default(),
        }
    }
}

fn default_base_url() -> Url {
    DEFAULT_BASE_URL.parse().expect("valid URL")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// The user whose collection is exported.
    ///
    /// Independent of the user that is logged in. Private fields
    /// are only visible if both match.
    pub owner: String,

    /// Delay between two requests while the export is prepared.
    pub poll_interval_millis: u64,

    /// Give up after this number of requests.
    pub max_attempts: NonZeroU32,
}

impl CollectionConfig {
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_millis)
    }
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_COLLECTION_OWNER.to_owned(),
            poll_interval_millis: DEFAULT_POLL_INTERVAL_MILLIS,
            max_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
