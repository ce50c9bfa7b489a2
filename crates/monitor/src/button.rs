//! Button Input Drivers
//!
//! Each driver plays the role of the GPIO interrupt line: it turns presses
//! into line levels and feeds them to the falling-edge detector. The detector
//! only raises the signal; the driver then yields so a woken consumer runs
//! before the driver continues.

use crate::config::{ButtonConfig, ButtonMode};
use event_signal::FallingEdgeDetector;
use std::time::Duration;
use task_scheduler::PeriodicDeadline;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Source of button presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonInput {
    /// Each stdin line is a press
    Stdin,
    /// A press every period
    Periodic(Duration),
}

impl From<&ButtonConfig> for ButtonInput {
    fn from(config: &ButtonConfig) -> Self {
        match config.mode {
            ButtonMode::Stdin => ButtonInput::Stdin,
            ButtonMode::Periodic => ButtonInput::Periodic(Duration::from_millis(config.period_ms)),
        }
    }
}

impl ButtonInput {
    /// Feed presses to the detector until the input ends
    pub async fn drive(self, mut detector: FallingEdgeDetector) {
        match self {
            ButtonInput::Stdin => {
                info!("Button attached to stdin: press Enter to log statistics");
                let mut lines = BufReader::new(tokio::io::stdin()).lines();
                loop {
                    match lines.next_line().await {
                        Ok(Some(_)) => press(&mut detector).await,
                        Ok(None) => {
                            info!("Stdin closed, button input detached");
                            return;
                        }
                        Err(e) => {
                            warn!("Stdin read failed, button input detached: {}", e);
                            return;
                        }
                    }
                }
            }
            ButtonInput::Periodic(period) => {
                info!("Simulated button press every {}ms", period.as_millis());
                let mut deadline = PeriodicDeadline::new(period);
                loop {
                    deadline.wait().await;
                    press(&mut detector).await;
                }
            }
        }
    }
}

/// Pull the line low then release it
async fn press(detector: &mut FallingEdgeDetector) {
    detector.on_level(false);
    detector.on_level(true);
    tokio::task::yield_now().await;
}
