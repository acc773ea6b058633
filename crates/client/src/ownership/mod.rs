// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use reqwest::StatusCode;

use bggsync_core::{Collection, CollectionIndex, Identity, OwnershipForm};

use crate::{Error, RawResponse, Result, WebApi};

const COLLECTION_EDIT_PATH: &str = "geekcollection.php";

/// The raw answer of the remote service to an update.
///
/// The service does not reliably report whether the update has been
/// applied. Only non-success status codes are treated as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub status: StatusCode,
    pub body: String,
}

/// Set the owned quantity of a collection entry.
///
/// All other ownership fields of the entry are resubmitted with
/// their current values.
pub async fn update_quantity(
    api: &impl WebApi,
    collection: &Collection,
    identity: &Identity,
    quantity: u32,
) -> Result<UpdateOutcome> {
    let index = CollectionIndex::new(collection);
    let Some(record) = index.get(identity) else {
        return Err(Error::NotInCollection(identity.clone()));
    };
    let form = OwnershipForm::from_record(record).with_quantity(quantity.to_string());
    let body = form.to_urlencoded()?;
    let url = api.join_url(COLLECTION_EDIT_PATH)?;
    log::debug!("Updating quantity of {identity} to {quantity}");
    let RawResponse { status, body, .. } = api.post_form(url, body).await?;
    if !status.is_success() {
        log::warn!("Updating {identity} failed: {status}");
        return Err(Error::UpdateRejected { status, body });
    }
    log::info!("Updated quantity of {identity} to {quantity}: {status}");
    log::debug!("Update response: {body}");
    Ok(UpdateOutcome { status, body })
}

#[cfg(test)]
mod tests;
