use std::collections::VecDeque;

/// Byte-level carry-over buffer for line reassembly.
///
/// Holds the not-yet-newline-terminated tail between chunk arrivals. One
/// buffer serves exactly one stream.
pub struct LineBuffer {
    buffer: VecDeque<u8>,
}

impl LineBuffer {
    /// Create a new buffer with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Add raw chunk bytes to the buffer
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes);
    }

    /// Extract the next complete line (up to and including `\n`),
    /// trimmed of surrounding whitespace.
    ///
    /// Returns None while no newline is buffered. The line is decoded
    /// only once complete, so a multi-byte character split across chunk
    /// boundaries stays in the buffer until its line arrives in full.
    /// Invalid sequences decode to U+FFFD.
    pub fn next_line(&mut self) -> Option<String> {
        let newline_pos = self.buffer.iter().position(|&b| b == b'\n')?;

        let line_bytes: Vec<u8> = self.buffer.drain(..=newline_pos).collect();

        Some(String::from_utf8_lossy(&line_bytes).trim().to_string())
    }

    /// Take whatever unterminated tail remains.
    ///
    /// Used at end-of-stream for diagnostics only. The tail is never
    /// emitted as a line.
    pub fn take_residue(&mut self) -> Vec<u8> {
        self.buffer.drain(..).collect()
    }

    /// Current buffer size
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
