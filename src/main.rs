//! ctf-settings — admin/inspection tool for the platform settings document.
//!
//! The platform loads its settings store in-process; this binary gives an
//! operator the same view from the command line, without going through the
//! HTTP admin surface:
//!
//! - First-run initialization: running it once creates
//!   `data/system_settings.json` populated with the compiled-in defaults.
//! - Health check: a malformed or unreadable document is reported while the
//!   tool keeps working on defaults, mirroring the platform's own degraded
//!   startup behaviour.
//! - `--json` dumps the browser-safe public view (credentials redacted),
//!   handy for comparing against what the frontend actually receives.
//! - `--reset` rewrites the document from the compiled-in defaults.
//!
//! # Usage
//!
//! ```text
//! ctf-settings [OPTIONS]
//!
//! Options:
//!   --data-dir <DIR>  Platform data directory [default: data]
//!   --reset           Rewrite the settings document from defaults
//!   --json            Print the public (redacted) view as JSON
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                 | Default | Description             |
//! |--------------------------|---------|-------------------------|
//! | `CTF_SETTINGS_DATA_DIR`  | `data`  | Platform data directory |
//! | `RUST_LOG`               | `info`  | Log filter              |

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ctf_settings::{SettingsStore, SystemSettings, DATA_DIR};

/// Admin/inspection tool for the A1CTF system-settings document.
#[derive(Debug, Parser)]
#[command(
    name = "ctf-settings",
    about = "Inspect, initialize, or reset the platform settings document",
    version
)]
struct Cli {
    /// Platform data directory holding `system_settings.json`.
    ///
    /// Relative paths resolve against the working directory, matching how
    /// the platform itself resolves its data directory.
    #[arg(long, default_value = DATA_DIR, env = "CTF_SETTINGS_DATA_DIR")]
    data_dir: PathBuf,

    /// Rewrite the settings document from the compiled-in defaults.
    ///
    /// The previous document is replaced in full; there is no backup.
    #[arg(long)]
    reset: bool,

    /// Print the public (credential-redacted) view as pretty JSON instead
    /// of the log summary.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let store = SettingsStore::new(&cli.data_dir);

    let settings = if cli.reset {
        let settings = store
            .save(SystemSettings::default())
            .context("failed to reset settings document")?;
        info!(path = %store.path().display(), "settings document reset to defaults");
        settings
    } else {
        // Degraded-mode load: a broken document is reported but does not
        // stop the tool (first run creates the document from defaults).
        let (settings, error) = store.load_or_default();
        if let Some(error) = error {
            warn!(%error, "settings document is unreadable; showing defaults");
        }
        settings
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&store.public_view())
            .context("failed to encode public settings view")?;
        println!("{json}");
        return Ok(());
    }

    info!(path = %store.path().display(), "settings document");
    info!(
        system_name = %settings.system_name,
        organization = %settings.system_organization,
        "branding"
    );
    info!(
        registration_enabled = settings.registration_enabled,
        captcha_enabled = settings.captcha_enabled,
        account_activation_method = %settings.account_activation_method,
        "registration policy"
    );
    info!(
        smtp_enabled = settings.smtp_enabled,
        smtp_host = %settings.smtp_host,
        smtp_port = settings.smtp_port,
        "outbound mail"
    );
    info!(updated_time = %settings.updated_time, "last updated");

    Ok(())
}
