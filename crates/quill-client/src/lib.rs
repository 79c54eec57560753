pub mod client;
pub mod request;

pub use client::GeneratorClient;
pub use request::{GenerationRequest, Length, Tone};

pub use quill_stream::{Draft, DraftPatch, DraftSession, Frame, Phase};
