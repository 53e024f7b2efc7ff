use std::sync::{mpsc, Arc};

use scribe_core::{Effect, Msg, Task};
use scribe_engine::{ClientSettings, Endpoint, EngineError, EngineEvent, EngineHandle, EventSink};
use scribe_logging::{scribe_info, scribe_warn, TextShape};

use super::clipboard::ClipboardWriter;

/// Executes core effects and feeds their outcomes back as `Msg`s.
pub struct EffectRunner {
    engine: EngineHandle,
    clipboard: Box<dyn ClipboardWriter>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        settings: ClientSettings,
        clipboard: Box<dyn ClipboardWriter>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink::new(msg_tx.clone())))?;
        Ok(Self {
            engine,
            clipboard,
            msg_tx,
        })
    }

    #[cfg(test)]
    fn with_client(
        client: Arc<dyn scribe_engine::ApiClient>,
        clipboard: Box<dyn ClipboardWriter>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, EngineError> {
        let engine = EngineHandle::with_client(client, Arc::new(MsgSink::new(msg_tx.clone())))?;
        Ok(Self {
            engine,
            clipboard,
            msg_tx,
        })
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitRequest {
                    request_id,
                    task,
                    input,
                } => {
                    scribe_info!(
                        "SubmitRequest request_id={} task={:?} input={}",
                        request_id,
                        task,
                        TextShape::of(&input)
                    );
                    self.engine.submit(request_id, map_task(task), input);
                }
                Effect::ProbeService => self.engine.probe(),
                Effect::WriteClipboard { text } => {
                    if let Err(reason) = self.clipboard.write_text(&text) {
                        scribe_warn!("Clipboard write failed: {}", reason);
                        let _ = self.msg_tx.send(Msg::ClipboardWriteFailed { reason });
                    }
                }
                Effect::ScheduleCopyReset { generation, after } => {
                    self.engine.schedule_copy_reset(generation, after);
                }
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.engine.shutdown();
    }
}

/// Turns engine events into messages for the UI loop.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl MsgSink {
    fn new(tx: mpsc::Sender<Msg>) -> Self {
        Self { tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(map_event(event));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::RequestCompleted {
            request_id,
            endpoint,
            result,
        } => {
            let task = map_endpoint(endpoint);
            match result {
                Ok(output) => Msg::RequestSucceeded {
                    task,
                    request_id,
                    output,
                },
                Err(err) => Msg::RequestFailed {
                    task,
                    request_id,
                    server_message: err.server_message,
                },
            }
        }
        EngineEvent::ServiceProbed { result } => {
            Msg::ServiceProbed(result.map_err(|err| err.to_string()))
        }
        EngineEvent::CopyIndicatorExpired { generation } => {
            Msg::CopyIndicatorExpired { generation }
        }
    }
}

fn map_task(task: Task) -> Endpoint {
    match task {
        Task::Summarize => Endpoint::Summarize,
        Task::Generate => Endpoint::Generate,
    }
}

fn map_endpoint(endpoint: Endpoint) -> Task {
    match endpoint {
        Endpoint::Summarize => Task::Summarize,
        Endpoint::Generate => Task::Generate,
    }
}
