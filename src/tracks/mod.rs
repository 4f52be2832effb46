pub mod display;
pub mod language;
pub mod selection;

pub use display::{audio_label, needs_sample_rate};
pub use selection::{comparator, select_best_track};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Video,
    Subtitle,
}

/// One selectable track of a media session.
///
/// Attributes that do not apply to the track's kind stay at their defaults
/// and are ignored by formatting. An absent language is distinct from an
/// empty one; both label as "Unknown language" but only the absent form
/// matches an absent language on another track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub kind: TrackKind,
    pub id: String,
    /// ISO 639 language code, if the stream carried one.
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Audio channel count, 0 when unknown.
    #[serde(default)]
    pub channel_count: u32,
    /// Audio sample rate in Hz, 0 when unknown.
    #[serde(default)]
    pub sample_rate: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub frame_rate: f32,
    #[serde(default = "default_pixel_aspect_ratio")]
    pub pixel_aspect_ratio: f32,
}

fn default_pixel_aspect_ratio() -> f32 {
    1.0
}

impl Track {
    fn new(kind: TrackKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            language: None,
            description: None,
            channel_count: 0,
            sample_rate: 0,
            width: 0,
            height: 0,
            frame_rate: 0.0,
            pixel_aspect_ratio: 1.0,
        }
    }

    pub fn audio(id: impl Into<String>) -> Self {
        Self::new(TrackKind::Audio, id)
    }

    pub fn video(id: impl Into<String>) -> Self {
        Self::new(TrackKind::Video, id)
    }

    pub fn subtitle(id: impl Into<String>) -> Self {
        Self::new(TrackKind::Subtitle, id)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_channel_count(mut self, channel_count: u32) -> Self {
        self.channel_count = channel_count;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_pixel_aspect_ratio(mut self, pixel_aspect_ratio: f32) -> Self {
        self.pixel_aspect_ratio = pixel_aspect_ratio;
        self
    }
}

/// Diagnostic representation with one fixed field set per kind.
///
/// Absent options render literally as `null`, defaults render as-is.
impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = self.language.as_deref().unwrap_or("null");
        let description = self.description.as_deref().unwrap_or("null");
        match self.kind {
            TrackKind::Audio => write!(
                f,
                "Track{{type=Audio, id={}, language={}, description={}, \
                 audioChannelCount={}, audioSampleRate={}}}",
                self.id, language, description, self.channel_count, self.sample_rate
            ),
            TrackKind::Video => write!(
                f,
                "Track{{type=Video, id={}, language={}, description={}, \
                 videoWidth={}, videoHeight={}, videoFrameRate={:?}, \
                 videoPixelAspectRatio={:?}}}",
                self.id,
                language,
                description,
                self.width,
                self.height,
                self.frame_rate,
                self.pixel_aspect_ratio
            ),
            TrackKind::Subtitle => write!(
                f,
                "Track{{type=Subtitle, id={}, language={}, description={}}}",
                self.id, language, description
            ),
        }
    }
}

/// Preference tuple used to rank candidate tracks.
#[derive(Debug, Clone, Default)]
pub struct TrackPreference {
    /// Id of a previously selected track, if any.
    pub track_id: Option<String>,
    /// Preferred language code. `None` means no stored preference and
    /// matches every track.
    pub language: Option<String>,
    /// Preferred audio channel count. 0 leaves channel-count ranking inert.
    pub channel_count: u32,
}
