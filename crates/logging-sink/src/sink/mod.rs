mod guard;
mod shared_sink;

pub use guard::SinkGuard;
pub use shared_sink::SharedSink;
