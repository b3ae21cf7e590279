use directory_core::{Effect, LoadError, Msg};
use directory_engine::{EngineEvent, EngineHandle, FetchSettings};
use directory_logging::{directory_debug, directory_info, directory_warn};

/// Executes core effects against the engine and turns engine events back
/// into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_engine(EngineHandle::new(settings))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    /// Starts each effect. A load the engine refuses comes back as a failed
    /// `LoadFinished` so the session does not wait on it forever.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut feedback = Vec::new();
        for effect in effects {
            match effect {
                Effect::LoadCatalog { url, options } => match self.engine.load(url, options) {
                    Some(request_id) => {
                        directory_info!("LoadCatalog accepted request_id={request_id}")
                    }
                    None => {
                        directory_warn!("LoadCatalog refused; engine unavailable");
                        feedback.push(Msg::LoadFinished(Err(LoadError::Network {
                            status: None,
                            message: "engine unavailable".to_string(),
                        })));
                    }
                },
            }
        }
        feedback
    }

    /// Next message from the engine, if one is waiting.
    pub fn poll(&self) -> Option<Msg> {
        loop {
            match self.engine.try_recv()? {
                EngineEvent::Progress(progress) => {
                    directory_debug!(
                        "request_id={} downloaded {} bytes",
                        progress.request_id,
                        progress.bytes
                    );
                }
                EngineEvent::LoadFinished { request_id, result } => {
                    if let Err(err) = &result {
                        directory_warn!("request_id={request_id} failed: {err}");
                    }
                    return Some(Msg::LoadFinished(result));
                }
            }
        }
    }
}
