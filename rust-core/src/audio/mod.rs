//! Host boundary: sample buffers in, finished impulse responses out

pub mod port;
pub mod sink;

pub use port::{AudioBufferPort, ChannelBuffer};
pub use sink::SaveSink;
