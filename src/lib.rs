// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Manage the private collection of a `BoardGameGeek` user.
//!
//! The records and their attributes are available without any network
//! access. The remote service is only accessed through the optional
//! [`client`] module.

pub use bggsync_core::*;

#[cfg(feature = "client")]
pub use bggsync_client as client;
