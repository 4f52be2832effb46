pub mod ffprobe;

pub use ffprobe::{parse_streams, probe};
