pub mod buffer;
pub mod draft;
pub mod frame;
pub mod session;

pub use buffer::LineBuffer;
pub use draft::{Draft, DraftPatch};
pub use frame::{frame_stream, Frame, DATA_PREFIX, DONE_MARKER};
pub use session::{DraftSession, Phase};
