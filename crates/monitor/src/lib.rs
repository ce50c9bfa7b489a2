//! Light-Level Monitoring Node
//!
//! Wires the sampler, the button-triggered statistics consumer and the
//! liveness tasks around one guarded sample ring.

pub mod button;
pub mod config;
mod error;
pub mod tasks;

pub use button::ButtonInput;
pub use crate::config::NodeConfig;
pub use error::{ConfigError, NodeError};

use crate::config::LoggingConfig;
use event_signal::{EventSignal, FallingEdgeDetector};
use ring_buffer::{GuardedRing, BUFFER_SIZE};
use sensor_input::SimulatedLdr;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use task_scheduler::TaskPriority;
use tasks::{ConsumerTask, HeartbeatTask, LogLed, SamplerTask, StatusTask};
use tokio::task::JoinHandle;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

/// Initialize logging
pub fn init_logging(config: &LoggingConfig) -> Result<(), NodeError> {
    let level = config.max_level()?;
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| NodeError::Logging(e.to_string()))
}

fn spawn_task<F>(name: &'static str, priority: TaskPriority, task: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Spawning {} task at priority {}", name, priority);
    tokio::spawn(task)
}

/// Run the node until Ctrl-C
pub async fn run_node(config: NodeConfig) -> Result<(), NodeError> {
    config.validate()?;

    let ring = Arc::new(GuardedRing::<BUFFER_SIZE>::new(config.access_timeout()));
    let (sender, waiter) = EventSignal::new();

    // Highest priority first
    let consumer = spawn_task(
        "consumer",
        ConsumerTask::<BUFFER_SIZE>::PRIORITY,
        ConsumerTask::new(Arc::clone(&ring), waiter).run(),
    );
    let sampler = spawn_task(
        "sampler",
        SamplerTask::<SimulatedLdr, BUFFER_SIZE>::PRIORITY,
        SamplerTask::new(
            SimulatedLdr::new(config.sampler.seed),
            config.sampler.calibration,
            ring,
            config.sample_period(),
        )
        .run(),
    );
    let status = spawn_task(
        "status",
        StatusTask::PRIORITY,
        StatusTask::new(Duration::from_millis(config.status.period_ms)).run(),
    );
    let heartbeat = spawn_task(
        "heartbeat",
        HeartbeatTask::<LogLed>::PRIORITY,
        HeartbeatTask::new(
            LogLed::default(),
            Duration::from_millis(config.heartbeat.half_period_ms),
        )
        .run(),
    );

    // Attached for the life of the process
    let detector = FallingEdgeDetector::attach(sender);
    tokio::spawn(ButtonInput::from(&config.button).drive(detector));

    let exited = tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res?;
            info!("Ctrl-C received, stopping node");
            return Ok(());
        }
        _ = consumer => "consumer",
        _ = sampler => "sampler",
        _ = status => "status",
        _ = heartbeat => "heartbeat",
    };

    error!("Task {} exited unexpectedly", exited);
    Err(NodeError::TaskExited(exited))
}
