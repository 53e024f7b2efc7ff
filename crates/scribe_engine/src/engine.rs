use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scribe_logging::{scribe_debug, scribe_info, scribe_warn, TextShape};
use thiserror::Error;

use crate::client::{ApiClient, ClientSettings, ReqwestApiClient};
use crate::timer::CopyTimer;
use crate::{ApiError, Endpoint, EngineEvent, RequestId};

/// Receives engine events on whichever thread produced them.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(#[source] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ApiError),
}

enum EngineCommand {
    Submit {
        request_id: RequestId,
        endpoint: Endpoint,
        input: String,
    },
    Probe,
    ScheduleCopyReset {
        generation: u64,
        delay: Duration,
    },
    Shutdown,
}

/// Owns the engine thread and its tokio runtime. Requests run concurrently;
/// outcomes are reported through the [`EventSink`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let client = ReqwestApiClient::new(settings)?;
        Self::with_client(Arc::new(client), sink)
    }

    pub fn with_client(
        client: Arc<dyn ApiClient>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("scribe-io")
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("scribe-engine".to_string())
            .spawn(move || run_loop(runtime, client, sink, cmd_rx))
            .map_err(EngineError::Thread)?;

        Ok(Self {
            cmd_tx,
            worker: Some(worker),
        })
    }

    pub fn submit(&self, request_id: RequestId, endpoint: Endpoint, input: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            request_id,
            endpoint,
            input: input.into(),
        });
    }

    pub fn probe(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Probe);
    }

    /// Restarts the copy-indicator timer; any earlier pending expiry is dropped.
    pub fn schedule_copy_reset(&self, generation: u64, delay: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ScheduleCopyReset { generation, delay });
    }

    /// Stops the engine thread. Pending timers are cancelled and in-flight
    /// requests are abandoned without reporting.
    pub fn shutdown(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
        let _ = worker.join();
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_loop(
    runtime: tokio::runtime::Runtime,
    client: Arc<dyn ApiClient>,
    sink: Arc<dyn EventSink>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
) {
    let mut copy_timer = CopyTimer::new(runtime.handle().clone());

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Submit {
                request_id,
                endpoint,
                input,
            } => {
                scribe_info!(
                    "request_id={} endpoint={} input={}",
                    request_id,
                    endpoint,
                    TextShape::of(&input)
                );
                let client = client.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let result = client.submit(endpoint, &input).await;
                    match &result {
                        Ok(output) => scribe_info!(
                            "request_id={} endpoint={} ok output={}",
                            request_id,
                            endpoint,
                            TextShape::of(output)
                        ),
                        Err(err) => scribe_warn!(
                            "request_id={} endpoint={} failed: {}",
                            request_id,
                            endpoint,
                            err
                        ),
                    }
                    sink.emit(EngineEvent::RequestCompleted {
                        request_id,
                        endpoint,
                        result,
                    });
                });
            }
            EngineCommand::Probe => {
                let client = client.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let result = client.probe().await;
                    if let Err(err) = &result {
                        scribe_warn!("service probe failed: {}", err);
                    }
                    sink.emit(EngineEvent::ServiceProbed { result });
                });
            }
            EngineCommand::ScheduleCopyReset { generation, delay } => {
                scribe_debug!("copy indicator generation={} resets in {:?}", generation, delay);
                let sink = sink.clone();
                copy_timer.schedule(delay, move || {
                    sink.emit(EngineEvent::CopyIndicatorExpired { generation });
                });
            }
            EngineCommand::Shutdown => break,
        }
    }

    copy_timer.cancel();
    runtime.shutdown_background();
    scribe_info!("engine stopped");
}
