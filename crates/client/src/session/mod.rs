// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use reqwest::{Client, header::CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use bggsync_core::{Collection, Identity};

use crate::{
    Error, Result,
    config::{Credentials, ServiceConfig},
    ownership::UpdateOutcome,
    webapi::{RawResponse, WebApi, receive_response},
};

mod cookies;
pub use self::cookies::{SessionCookies, TOMBSTONE_MARKER, is_tombstone};

const LOGIN_PATH: &str = "login/api/v1";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const CONTENT_TYPE_JSON: &str = "application/json";

const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    credentials: &'a Credentials,
}

/// An authenticated connection to the remote service.
///
/// The connection is released when the session is dropped, i.e. on
/// every exit path of the enclosing scope. See also [`Session::scope()`].
#[derive(Debug)]
pub struct Session {
    config: ServiceConfig,
    client: Client,
    cookies: Arc<SessionCookies>,
}

impl Session {
    /// Open a new connection and log in.
    ///
    /// Cookies only enter the session through [`SessionCookies`], which
    /// repairs the login response.
    pub async fn login(config: ServiceConfig, credentials: &Credentials) -> Result<Self> {
        let cookies = Arc::new(SessionCookies::default());
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::clone(&cookies))
            .build()?;
        let session = Self {
            config,
            client,
            cookies,
        };
        authenticate(&session, credentials).await?;
        Ok(session)
    }

    /// Run a unit of work within a new session.
    ///
    /// The session is closed afterwards, regardless of the outcome.
    pub async fn scope<T, E, F>(
        config: ServiceConfig,
        credentials: &Credentials,
        unit_of_work: F,
    ) -> std::result::Result<T, E>
    where
        F: AsyncFnOnce(&Session) -> std::result::Result<T, E>,
        E: From<Error>,
    {
        let session = Self::login(config, credentials).await?;
        let result = unit_of_work(&session).await;
        session.close();
        result
    }

    #[must_use]
    pub const fn config(&self) -> &ServiceConfig {
        &self.config
    }

    #[must_use]
    pub fn cookies(&self) -> &SessionCookies {
        &self.cookies
    }

    pub async fn load_collection(&self) -> Result<Collection> {
        crate::collection::load_collection(self, &self.config.collection).await
    }

    pub async fn update_quantity(
        &self,
        collection: &Collection,
        identity: &Identity,
        quantity: u32,
    ) -> Result<UpdateOutcome> {
        crate::ownership::update_quantity(self, collection, identity, quantity).await
    }

    /// Release the connection.
    pub fn close(self) {
        log::debug!("Closing session");
        drop(self);
    }
}

pub(crate) async fn authenticate(api: &impl WebApi, credentials: &Credentials) -> Result<()> {
    let url = api.join_url(LOGIN_PATH)?;
    let body = serde_json::to_vec(&LoginRequest { credentials })?;
    // The body must be consumed to complete the login
    let response = api.post_json(url, body).await?;
    // Diagnostics only. Tombstones never reach the jar, see SessionCookies::set_cookies().
    let (discarded, retained): (Vec<_>, Vec<_>) =
        response.set_cookie_headers().partition(|set_cookie| is_tombstone(set_cookie));
    log::debug!(
        "Login response: {status} ({retained} cookie(s) retained, {discarded} discarded)",
        status = response.status,
        retained = retained.len(),
        discarded = discarded.len(),
    );
    if !response.status.is_success() {
        return Err(Error::LoginRejected {
            status: response.status,
        });
    }
    if retained.is_empty() {
        log::warn!("Login did not provide any session cookies");
    }
    log::info!("Logged in as {}", credentials.username);
    Ok(())
}

impl WebApi for Session {
    fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    async fn get(&self, url: Url) -> Result<RawResponse> {
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        receive_response(response).await
    }

    async fn post_json(&self, url: Url, body: Vec<u8>) -> Result<RawResponse> {
        log::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await?;
        receive_response(response).await
    }

    async fn post_form(&self, url: Url, body: String) -> Result<RawResponse> {
        log::debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_FORM)
            .body(body)
            .send()
            .await?;
        receive_response(response).await
    }
}
