//! vinput client entry point.
//!
//! Loads the configuration, installs logging, creates the virtual pointer and
//! keyboard, and holds them until Ctrl+C.  Dropping the devices destroys them.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()                  -- TOML file or defaults
//!  └─ DeviceManager<LinuxNodeOpener> -- on a blocking thread (settle delay)
//!       ├─ create_pointer_or_disabled(width, height)
//!       └─ create_keyboard_or_disabled()
//!  └─ EventEmitter::apply(Sync)      -- flush both devices once
//!  └─ ctrl_c().await
//!  └─ drop(DeviceSet)                -- UI_DEV_DESTROY + close
//! ```
//!
//! A device that cannot be created is disabled rather than fatal; the process
//! only exits early when neither device could be created.

#[cfg(target_os = "linux")]
use anyhow::Context;
#[cfg(target_os = "linux")]
use tracing::{info, warn};
#[cfg(target_os = "linux")]
use tracing_subscriber::EnvFilter;

#[cfg(target_os = "linux")]
use vinput_client::{
    application::{
        emit_input::{DeviceSet, EventEmitter},
        manage_devices::DeviceManager,
    },
    infrastructure::{storage::config, uinput::linux::LinuxNodeOpener},
};
#[cfg(target_os = "linux")]
use vinput_core::{InputAction, KeyTranslationTable};

#[cfg(target_os = "linux")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = config::load_config();

    // Initialise structured logging; RUST_LOG wins over the config file.
    let fallback_level = loaded
        .as_ref()
        .map(|cfg| cfg.logging.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level)),
        )
        .init();

    let cfg = loaded.context("failed to load configuration")?;
    info!(uinput = %cfg.device.uinput_path.display(), "vinput client starting");

    // ── Device creation ───────────────────────────────────────────────────────
    // Creation sleeps for the settle delay, so it runs off the async runtime.
    let device_cfg = cfg.device.clone();
    let screen = cfg.screen.clone();
    let mut devices = tokio::task::spawn_blocking(move || {
        let manager = DeviceManager::new(
            LinuxNodeOpener::new(device_cfg.uinput_path.clone()),
            device_cfg.settle_delay(),
        )
        .with_names(device_cfg.pointer_name, device_cfg.keyboard_name);
        DeviceSet {
            pointer: manager.create_pointer_or_disabled(screen.width, screen.height),
            keyboard: manager.create_keyboard_or_disabled(),
        }
    })
    .await
    .context("device creation task panicked")?;

    if !devices.pointer.is_live() && !devices.keyboard.is_live() {
        anyhow::bail!(
            "no virtual device could be created at {}",
            cfg.device.uinput_path.display()
        );
    }
    if !devices.pointer.is_live() {
        warn!("pointer disabled; only keyboard input will be injected");
    }
    if !devices.keyboard.is_live() {
        warn!("keyboard disabled; only pointer input will be injected");
    }

    let mut emitter = EventEmitter::new(KeyTranslationTable::shared());
    emitter.apply(&mut devices, &InputAction::Sync);

    info!("vinput client ready; press Ctrl+C to remove the devices");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl+C")?;
    info!("shutdown signal received");

    drop(devices);
    let stats = emitter.stats();
    info!(
        events_written = stats.events_written,
        write_failures = stats.write_failures,
        translation_misses = stats.translation_misses,
        unmapped_buttons = stats.unmapped_buttons,
        "vinput client stopped"
    );
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn main() -> anyhow::Result<()> {
    anyhow::bail!("vinput-client needs the Linux uinput subsystem")
}
