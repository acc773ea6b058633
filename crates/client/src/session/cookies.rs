// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use reqwest::{
    cookie::{CookieStore, Jar},
    header::HeaderValue,
};
use url::Url;

/// Marks cookies that the remote service wants to be deleted.
///
/// The login response contains both the deleted and the new values for
/// the same cookies. Merging all of them into a cookie jar loses the
/// authentication cookies.
pub const TOMBSTONE_MARKER: &[u8] = b"delete";

#[must_use]
pub fn is_tombstone(set_cookie: &[u8]) -> bool {
    set_cookie
        .windows(TOMBSTONE_MARKER.len())
        .any(|window| window == TOMBSTONE_MARKER)
}

/// Cookie store of a session.
///
/// All `Set-Cookie` headers containing the [`TOMBSTONE_MARKER`] are
/// discarded. Only the remaining headers are merged into the jar.
#[derive(Debug, Default)]
pub struct SessionCookies {
    jar: Jar,
}

impl CookieStore for SessionCookies {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        let mut retained = cookie_headers.filter(|header| {
            if is_tombstone(header.as_bytes()) {
                log::debug!("Discarding tombstone cookie from {url}");
                false
            } else {
                true
            }
        });
        self.jar.set_cookies(&mut retained, url);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.jar.cookies(url)
    }
}
