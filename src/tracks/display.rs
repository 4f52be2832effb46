use super::{Track, language};

/// Parenthetical channel-layout descriptor for an audio track label.
///
/// 0 means the count is unknown and gets no descriptor at all.
pub fn channel_descriptor(channel_count: u32) -> Option<String> {
    match channel_count {
        0 => None,
        1 => Some("mono".to_string()),
        2 => Some("stereo".to_string()),
        6 => Some("5.1 surround".to_string()),
        8 => Some("7.1 surround".to_string()),
        n => Some(format!("{} channels", n)),
    }
}

/// Human-readable label for an audio track, e.g. "English (5.1 surround)".
///
/// An absent or empty language labels as "Unknown language"; codes with no
/// known display name render verbatim. With `show_sample_rate` the rate in
/// kHz joins the parenthetical, or forms one by itself.
pub fn audio_label(track: &Track, show_sample_rate: bool) -> String {
    let language = match track.language.as_deref() {
        None | Some("") => "Unknown language".to_string(),
        Some(code) => language::display_name(code).unwrap_or(code).to_string(),
    };

    let mut clauses = Vec::new();
    if let Some(descriptor) = channel_descriptor(track.channel_count) {
        clauses.push(descriptor);
    }
    if show_sample_rate {
        clauses.push(format!("{}kHz", track.sample_rate / 1000));
    }

    if clauses.is_empty() {
        language
    } else {
        format!("{} ({})", language, clauses.join(", "))
    }
}

/// True when two tracks agree on language and channel count, so their labels
/// would collide unless the sample rate is shown.
pub fn needs_sample_rate(tracks: &[Track]) -> bool {
    for (i, a) in tracks.iter().enumerate() {
        for b in &tracks[i + 1..] {
            if a.channel_count == b.channel_count
                && language::is_same_language(a.language.as_deref(), b.language.as_deref())
            {
                return true;
            }
        }
    }
    false
}
