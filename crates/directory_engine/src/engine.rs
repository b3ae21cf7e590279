use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use directory_core::DirectoryOptions;
use directory_logging::directory_info;

use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ReqwestFetcher};
use crate::loader::load_with_progress;
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Load {
        request_id: RequestId,
        url: String,
        options: DirectoryOptions,
    },
}

/// Runs loads on a background tokio runtime, one at a time.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    in_flight: Arc<AtomicBool>,
    next_request: AtomicU64,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let in_flight = Arc::new(AtomicBool::new(false));
        let worker_flag = in_flight.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                let in_flight = worker_flag.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx, &in_flight).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx,
            in_flight,
            next_request: AtomicU64::new(1),
        }
    }

    /// Starts a load unless one is already running. Returns the request id
    /// when the load was accepted.
    pub fn load(&self, url: impl Into<String>, options: DirectoryOptions) -> Option<RequestId> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            directory_info!("load ignored: another load is in flight");
            return None;
        }
        let request_id = self.next_request.fetch_add(1, Ordering::Relaxed);
        let command = EngineCommand::Load {
            request_id,
            url: url.into(),
            options,
        };
        if self.cmd_tx.send(command).is_err() {
            self.in_flight.store(false, Ordering::Release);
            return None;
        }
        Some(request_id)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    in_flight: &AtomicBool,
) {
    match command {
        EngineCommand::Load {
            request_id,
            url,
            options,
        } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = load_with_progress(fetcher, request_id, &url, &options, &sink).await;
            // Cleared before the result is visible so a reload can follow it.
            in_flight.store(false, Ordering::Release);
            let _ = event_tx.send(EngineEvent::LoadFinished { request_id, result });
        }
    }
}
