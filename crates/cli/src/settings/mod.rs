// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use bggsync_client::{Credentials, ServiceConfig};

const APP_NAME: &str = "bggsync";

const FILE_NAME: &str = "settings";

const FILE_SUFFIX: &str = "ron";

const USERNAME_ENV: &str = "BGG_USERNAME";

const PASSWORD_ENV: &str = "BGG_PASSWORD";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Might be omitted if provided by the environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) credentials: Option<Credentials>,

    pub(crate) service: ServiceConfig,
}

impl Settings {
    /// Load settings from the given file or the default location.
    ///
    /// A missing file at the default location results in the default
    /// settings.
    pub(crate) fn load(file_path: Option<&Path>) -> anyhow::Result<Self> {
        let (file_path, required) = match file_path {
            Some(file_path) => (file_path.to_path_buf(), true),
            None => {
                let Some(file_path) = default_file_path() else {
                    log::warn!("No configuration directory available");
                    return Ok(Default::default());
                };
                (file_path, false)
            }
        };
        log::info!("Loading settings from file: {}", file_path.display());
        match fs::read_to_string(&file_path) {
            Ok(text) => Self::parse(&text)
                .with_context(|| format!("parsing settings file {}", file_path.display())),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Settings file not found, using defaults");
                Ok(Default::default())
            }
            Err(err) => {
                Err(err).with_context(|| format!("reading settings file {}", file_path.display()))
            }
        }
    }

    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        ron::de::from_str(text).map_err(Into::into)
    }
}

fn default_file_path() -> Option<PathBuf> {
    let app_dirs = ProjectDirs::from("", "", APP_NAME)?;
    let mut path_buf = app_dirs.config_dir().to_path_buf();
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    Some(path_buf)
}

/// Credentials from the environment take precedence over the settings.
pub(crate) fn resolve_credentials(
    from_settings: Option<Credentials>,
) -> anyhow::Result<Credentials> {
    merge_credentials(
        from_settings,
        env::var(USERNAME_ENV).ok(),
        env::var(PASSWORD_ENV).ok(),
    )
}

fn merge_credentials(
    from_settings: Option<Credentials>,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<Credentials> {
    let (settings_username, settings_password) = from_settings
        .map(|Credentials { username, password }| (Some(username), Some(password)))
        .unwrap_or_default();
    let Some(username) = username.or(settings_username) else {
        bail!("missing username: neither in settings nor in {USERNAME_ENV}");
    };
    let Some(password) = password.or(settings_password) else {
        bail!("missing password: neither in settings nor in {PASSWORD_ENV}");
    };
    Ok(Credentials { username, password })
}
