use anyhow::Result;
use futures::{Stream, StreamExt};

use crate::buffer::LineBuffer;

/// Prefix of a line carrying a payload.
pub const DATA_PREFIX: &str = "data: ";

/// Payload token that closes the stream instead of carrying data.
pub const DONE_MARKER: &str = "[DONE]";

/// One recognized wire frame: a single newline-delimited unit of the
/// stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A `data: ` line; the payload text follows the prefix.
    Data(String),
    /// The `data: [DONE]` sentinel: no more data frames follow.
    Done,
}

impl Frame {
    /// Classify a trimmed line.
    ///
    /// Blank lines and lines without the data prefix produce no frame;
    /// they are normal stream noise, not errors.
    pub fn classify(line: &str) -> Option<Frame> {
        let data = line.strip_prefix(DATA_PREFIX)?;

        if data == DONE_MARKER {
            Some(Frame::Done)
        } else {
            Some(Frame::Data(data.to_string()))
        }
    }
}

/// Reassemble an arbitrarily-chunked byte stream into complete frames.
///
/// Lazy: frames are emitted as upstream chunks arrive, however the
/// transport chose to split them. A transport error item is yielded once
/// and ends the stream. An unterminated trailing line at end-of-stream is
/// discarded, never emitted.
pub fn frame_stream<S, B, E>(chunks: S) -> impl Stream<Item = Result<Frame>>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<anyhow::Error>,
{
    async_stream::stream! {
        let mut chunks = Box::pin(chunks);
        let mut buffer = LineBuffer::with_capacity(4096);

        while let Some(chunk_result) = chunks.next().await {
            match chunk_result {
                Ok(bytes) => {
                    buffer.extend(bytes.as_ref());

                    // Process all complete lines in buffer
                    while let Some(line) = buffer.next_line() {
                        if let Some(frame) = Frame::classify(&line) {
                            yield Ok(frame);
                        }
                    }
                }
                Err(e) => {
                    yield Err(e.into().context("generation stream failed"));
                    return;
                }
            }
        }

        let residue = buffer.take_residue();
        if !residue.is_empty() {
            tracing::debug!(
                bytes = residue.len(),
                "discarding unterminated trailing line at end of stream"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_data_frame() {
        let frame = Frame::classify("data: {\"title\":\"Cats\"}");
        assert_eq!(frame, Some(Frame::Data("{\"title\":\"Cats\"}".to_string())));
    }

    #[test]
    fn test_classify_done_marker() {
        assert_eq!(Frame::classify("data: [DONE]"), Some(Frame::Done));
    }

    #[test]
    fn test_classify_ignores_other_shapes() {
        assert_eq!(Frame::classify(""), None);
        assert_eq!(Frame::classify("event: update"), None);
        assert_eq!(Frame::classify(": keep-alive"), None);
        assert_eq!(Frame::classify("data:no-space"), None);
    }
}
