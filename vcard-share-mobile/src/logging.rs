// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Optional log output for host apps.
//!
//! The core only emits `tracing` events. Nothing is printed until the host
//! calls [`init_logging`].

use once_cell::sync::OnceCell;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::error::MobileError;

/// Directive used when the host passes no filter.
pub const DEFAULT_LOG_DIRECTIVE: &str = "vcard_share_core=info";

static LOGGING: OnceCell<()> = OnceCell::new();

/// Builds the filter: the host's directives, or `RUST_LOG` plus the default.
fn build_filter(filter: Option<&str>) -> Result<EnvFilter, MobileError> {
    match filter {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|e| MobileError::Logging(e.to_string()))
        }
        None => {
            let directive = DEFAULT_LOG_DIRECTIVE
                .parse::<Directive>()
                .map_err(|e| MobileError::Logging(e.to_string()))?;
            Ok(EnvFilter::from_default_env().add_directive(directive))
        }
    }
}

/// Installs a global fmt subscriber.
///
/// Only the first successful call installs anything; later calls return
/// `Ok(())`. Fails if the filter does not parse or if the host process
/// already installed its own global subscriber.
#[uniffi::export]
pub fn init_logging(filter: Option<String>) -> Result<(), MobileError> {
    LOGGING
        .get_or_try_init(|| {
            let env_filter = build_filter(filter.as_deref())?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .try_init()
                .map_err(|e| MobileError::Logging(e.to_string()))?;
            tracing::info!("vCard Share logging initialized");
            Ok(())
        })
        .map(|_| ())
}
