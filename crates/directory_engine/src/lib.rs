//! Directory engine: fetching, decoding and background catalog loads.
mod decode;
mod engine;
mod fetch;
mod loader;
mod types;

pub use decode::decode_body;
pub use engine::EngineHandle;
pub use fetch::{
    ChannelProgressSink, FetchSettings, Fetcher, NullProgressSink, ProgressSink, ReqwestFetcher,
};
pub use loader::load_catalog;
pub use types::{
    EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, LoadProgress, RequestId,
};
