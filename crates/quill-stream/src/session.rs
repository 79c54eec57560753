use anyhow::{bail, Result};
use futures::{Stream, StreamExt};

use crate::draft::{Draft, DraftPatch};
use crate::frame::{frame_stream, Frame};

/// Where a session stands in its lifecycle.
///
/// `Closed` and `Errored` are terminal: a terminal session accepts no
/// further streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, nothing consumed yet.
    Idle,
    /// Consuming a stream.
    Streaming,
    /// Ended on the close sentinel or natural end-of-stream.
    Closed,
    /// Ended on a transport failure.
    Errored,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Closed | Phase::Errored)
    }
}

/// Folds one generation stream into a [`Draft`], notifying an observer
/// after every successful merge.
///
/// One session serves exactly one submission. The draft snapshot stays
/// readable in every phase; after a transport failure it holds the
/// best-effort final value as of the last merge.
pub struct DraftSession {
    phase: Phase,
    draft: Draft,
}

impl DraftSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            draft: Draft::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current snapshot, valid at any point of the stream.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Consume the session, keeping the final snapshot.
    pub fn into_draft(self) -> Draft {
        self.draft
    }

    /// Drive a raw chunk stream to a terminal phase.
    ///
    /// Chunks may split frames (and multi-byte characters) anywhere; see
    /// [`frame_stream`].
    pub async fn run<S, B, E, F>(&mut self, chunks: S, on_update: F) -> Result<&Draft>
    where
        S: Stream<Item = std::result::Result<B, E>>,
        B: AsRef<[u8]>,
        E: Into<anyhow::Error>,
        F: FnMut(&Draft),
    {
        self.run_frames(frame_stream(chunks), on_update).await
    }

    /// Drive a reassembled frame stream to a terminal phase.
    ///
    /// The observer runs synchronously after each successful merge, in
    /// frame order. Malformed payloads are logged and skipped; only a
    /// transport error ends the stream early. Dropping the returned
    /// future abandons the stream: no further frames are consumed and the
    /// observer never fires again.
    pub async fn run_frames<S, F>(&mut self, frames: S, mut on_update: F) -> Result<&Draft>
    where
        S: Stream<Item = Result<Frame>>,
        F: FnMut(&Draft),
    {
        if self.phase != Phase::Idle {
            bail!("draft session is not reusable (phase: {:?})", self.phase);
        }
        self.phase = Phase::Streaming;

        let mut frames = Box::pin(frames);

        while let Some(item) = frames.next().await {
            match item {
                // Normal end marker: stop consuming, no update emitted.
                Ok(Frame::Done) => break,
                Ok(Frame::Data(payload)) => match serde_json::from_str::<DraftPatch>(&payload) {
                    Ok(patch) => {
                        self.draft = self.draft.merged(&patch);
                        on_update(&self.draft);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping malformed data frame");
                    }
                },
                Err(e) => {
                    self.phase = Phase::Errored;
                    return Err(e);
                }
            }
        }

        self.phase = Phase::Closed;
        Ok(&self.draft)
    }
}

impl Default for DraftSession {
    fn default() -> Self {
        Self::new()
    }
}
