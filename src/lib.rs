//! Media-track selection and labeling.
//!
//! The [`tracks`] module is the pure core: a comparator-based best-track
//! selector and human-readable label formatting for audio/video/subtitle
//! tracks. [`analyzer`] builds track lists from ffprobe output, [`config`]
//! holds the preference defaults, and the `trackpick` binary wires them
//! together.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod tracks;
pub mod utils;

pub use error::AppError;
pub use tracks::{Track, TrackKind, TrackPreference};
