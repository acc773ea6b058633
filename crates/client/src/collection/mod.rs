// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use reqwest::StatusCode;
use url::Url;

use bggsync_core::Collection;

use crate::{Error, Result, WebApi, config::CollectionConfig};

const COLLECTION_PATH: &str = "xmlapi2/collection";

fn collection_url(api: &impl WebApi, owner: &str) -> Result<Url> {
    let mut url = api.join_url(COLLECTION_PATH)?;
    url.query_pairs_mut()
        .append_pair("username", owner)
        .append_pair("showprivate", "1")
        .append_pair("version", "1");
    Ok(url)
}

/// Fetch the whole collection of the configured owner.
///
/// The export is prepared asynchronously by the remote service. While
/// it is not ready yet the request is repeated after a delay, at most
/// [`CollectionConfig::max_attempts`] times.
pub async fn load_collection(api: &impl WebApi, config: &CollectionConfig) -> Result<Collection> {
    let url = collection_url(api, &config.owner)?;
    let max_attempts = config.max_attempts.get();
    for attempt in 1..=max_attempts {
        let response = api.get(url.clone()).await?;
        if response.status == StatusCode::OK {
            let collection = Collection::from_xml(&response.body)?;
            log::info!(
                "Loaded {} record(s) from the collection of {}",
                collection.len(),
                config.owner
            );
            return Ok(collection);
        }
        if response.status != StatusCode::ACCEPTED {
            log::warn!("Loading collection failed: {}", response.status);
            return Err(Error::CollectionLoad {
                status: response.status,
            });
        }
        if attempt < max_attempts {
            log::debug!(
                "Collection not ready yet ({attempt}/{max_attempts}), retrying in {} ms",
                config.poll_interval_millis
            );
            tokio::time::sleep(config.poll_interval()).await;
        }
    }
    log::warn!("Collection still not ready after {max_attempts} attempt(s)");
    Err(Error::CollectionLoadTimeout {
        attempts: max_attempts,
    })
}
