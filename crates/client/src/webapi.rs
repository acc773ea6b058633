// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use reqwest::{
    Response, StatusCode,
    header::{HeaderMap, SET_COOKIE},
};
use url::Url;

use crate::Result;

/// A response with its body already consumed.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Raw `Set-Cookie` header values.
    pub fn set_cookie_headers(&self) -> impl Iterator<Item = &[u8]> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .map(reqwest::header::HeaderValue::as_bytes)
    }
}

/// Requests that are sent on behalf of an authenticated user.
pub trait WebApi {
    fn base_url(&self) -> &Url;

    fn join_url(&self, path: &str) -> Result<Url> {
        let url = self.base_url().join(path)?;
        log::debug!("API URL: {url}");
        Ok(url)
    }

    fn get(&self, url: Url) -> impl Future<Output = Result<RawResponse>> + Send;

    fn post_json(&self, url: Url, body: Vec<u8>)
    -> impl Future<Output = Result<RawResponse>> + Send;

    fn post_form(&self, url: Url, body: String)
    -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Receive the response including the whole body.
///
/// Unlike a status check this never fails for non-success status
/// codes. Their meaning depends on the endpoint.
pub async fn receive_response(response: Response) -> Result<RawResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.text().await?;
    log::debug!("Received response: {status} ({} byte(s))", body.len());
    Ok(RawResponse {
        status,
        headers,
        body,
    })
}
