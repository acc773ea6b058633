// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{collections::VecDeque, sync::Mutex};

use reqwest::{Method, StatusCode};
use url::Url;

use crate::{RawResponse, Result, WebApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) body: String,
}

/// Replays prepared responses in order and records all requests.
#[derive(Debug)]
pub(crate) struct ScriptedApi {
    base_url: Url,
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedApi {
    pub(crate) fn new(responses: impl IntoIterator<Item = RawResponse>) -> Self {
        Self {
            base_url: "https://boardgamegeek.test/".parse().unwrap(),
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::default(),
        }
    }

    pub(crate) fn with_statuses(
        statuses: impl IntoIterator<Item = (StatusCode, &'static str)>,
    ) -> Self {
        Self::new(
            statuses
                .into_iter()
                .map(|(status, body)| RawResponse::new(status, body)),
        )
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, method: Method, url: Url, body: String) -> RawResponse {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest { method, url, body });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no more scripted responses")
    }
}

impl WebApi for ScriptedApi {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, url: Url) -> Result<RawResponse> {
        Ok(self.respond(Method::GET, url, String::new()))
    }

    async fn post_json(&self, url: Url, body: Vec<u8>) -> Result<RawResponse> {
        Ok(self.respond(Method::POST, url, String::from_utf8(body).unwrap()))
    }

    async fn post_form(&self, url: Url, body: String) -> Result<RawResponse> {
        Ok(self.respond(Method::POST, url, body))
    }
}
