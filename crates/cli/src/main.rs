// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use bggsync_client::Session;
use bggsync_core::Identity;

mod export;
mod settings;

use self::settings::Settings;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(version, about = "Manage the private collection of a BoardGameGeek user")]
struct Args {
    /// Settings file, defaults to the platform-specific configuration directory
    #[arg(long, env = "BGGSYNC_SETTINGS")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print all records of the collection as JSON
    Dump,

    /// Export the owned quantities as tab-separated values
    Export {
        /// Output file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Set the owned quantity of a collection entry
    SetQuantity {
        collid: String,
        objectid: String,
        quantity: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = dotenvy::dotenv() {
        // Print to stderr because logging has not been initialized yet
        eprintln!("Loaded environment from dotenv file {}", path.display());
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let Args { settings, command } = Args::parse();
    let Settings {
        credentials,
        service,
    } = Settings::load(settings.as_deref())?;
    let credentials = settings::resolve_credentials(credentials)?;

    Session::scope(service, &credentials, async move |session| {
        run(session, command).await
    })
    .await
}

async fn run(session: &Session, command: Command) -> anyhow::Result<()> {
    let collection = &session.load_collection().await?;
    match command {
        Command::Dump => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, collection)?;
            writeln!(stdout)?;
        }
        Command::Export { output } => {
            if let Some(path) = output {
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                export::write_quantities(&mut writer, collection)?;
                writer.flush()?;
                log::info!("Exported {} record(s) to {}", collection.len(), path.display());
            } else {
                export::write_quantities(&mut io::stdout().lock(), collection)?;
            }
        }
        Command::SetQuantity {
            collid,
            objectid,
            quantity,
        } => {
            let identity = Identity::new(collid, objectid);
            let outcome = session
                .update_quantity(collection, &identity, quantity)
                .await?;
            println!("{}", outcome.status);
            println!("{}", outcome.body);
        }
    }
    Ok(())
}
