//! Renderer-facing output

pub mod sink;

pub use sink::ChannelSink;
