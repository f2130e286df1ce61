//! Tick scheduling for the sky animation.
//!
//! The sky is recomputed on a fixed cadence chosen by an explicit device
//! class, never by sniffing the environment at runtime. The loop owns the
//! clock sample and hands it to the callback by value each tick; tearing
//! down the scheduler cancels the timer so nothing leaks.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::sky::ClockSample;

// ---------------------------------------------------------------------------
// Device class
// ---------------------------------------------------------------------------

/// How capable the presentation surface is. Chosen once by the caller and
/// passed in; gates tick cadence and which decorative layers run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceClass {
    /// Capable device, full animation.
    Full,
    /// Constrained device or reduced-motion preference.
    Reduced,
    /// Barely animate at all.
    Minimal,
}

impl DeviceClass {
    /// Time between sky recomputations.
    pub fn tick_period(self) -> Duration {
        match self {
            DeviceClass::Full => Duration::from_secs(60),
            DeviceClass::Reduced => Duration::from_secs(300),
            DeviceClass::Minimal => Duration::from_secs(600),
        }
    }

    /// Star count for the starfield layer.
    pub fn star_count(self, configured: usize) -> usize {
        match self {
            DeviceClass::Full => configured,
            DeviceClass::Reduced => configured * 2 / 5,
            DeviceClass::Minimal => 0,
        }
    }

    /// Whether the purely decorative layers (drift shapes, grid waves)
    /// run at all.
    pub fn decorative_layers(self) -> bool {
        !matches!(self, DeviceClass::Minimal)
    }

    /// Parse a command-line value.
    pub fn from_arg(s: &str) -> Option<Self> {
        match s {
            "full" => Some(DeviceClass::Full),
            "reduced" => Some(DeviceClass::Reduced),
            "minimal" => Some(DeviceClass::Minimal),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// TickScheduler
// ---------------------------------------------------------------------------

/// Recurring tick driver. Spawns a tokio task that reads the wall clock on
/// each interval tick and passes the sample to the callback.
pub struct TickScheduler {
    device: DeviceClass,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl TickScheduler {
    /// Spawn the tick loop on the current runtime. The first tick fires
    /// immediately so the sky is never presented in its default state.
    pub fn spawn<F>(device: DeviceClass, mut on_tick: F) -> Self
    where
        F: FnMut(ClockSample) + Send + 'static,
    {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(device.tick_period());
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        on_tick(ClockSample::now());
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            log::debug!("tick scheduler stopping");
                            break;
                        }
                    }
                }
            }
        });

        log::info!(
            "tick scheduler started: {:?}, period {}s",
            device,
            device.tick_period().as_secs()
        );

        Self {
            device,
            shutdown_tx,
            handle,
        }
    }

    /// The device class this scheduler was built for.
    #[inline]
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Stop the timer and wait for the loop to exit.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(true);
        let _ = self.handle.await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
