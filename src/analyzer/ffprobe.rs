use crate::error::AppError;
use crate::tracks::Track;
use serde::Deserialize;
use std::process::Command;
use tracing::debug;

/// Probe a media file with ffprobe and map its streams to tracks.
pub fn probe(input_path: &str) -> Result<Vec<Track>, AppError> {
    let args = [
        "-v",
        "error",
        "-show_entries",
        "stream=index,codec_type,channels,sample_rate,width,height,\
         r_frame_rate,avg_frame_rate,sample_aspect_ratio\
         :stream_tags=language,title",
        "-of",
        "json",
        input_path,
    ];

    let output = run_ffprobe(&args)?;
    let tracks = parse_streams(&output)?;
    debug!(count = tracks.len(), input = input_path, "probed tracks");
    Ok(tracks)
}

/// Map ffprobe `-of json` stream output to tracks.
///
/// Stream index becomes the track id (falling back to list position when
/// absent); streams of kinds other than audio/video/subtitle are skipped.
pub fn parse_streams(json: &str) -> Result<Vec<Track>, AppError> {
    let data: FfprobeOutput = serde_json::from_str(json)
        .map_err(|e| AppError::Probe(format!("Failed to parse ffprobe output: {}", e)))?;

    let mut tracks = Vec::new();
    for (position, stream) in data.streams.into_iter().enumerate() {
        let id = stream
            .index
            .map(|i| i.to_string())
            .unwrap_or_else(|| position.to_string());

        let mut track = match stream.codec_type.as_deref() {
            Some("audio") => Track::audio(id)
                .with_channel_count(stream.channels.unwrap_or(0))
                .with_sample_rate(parse_numeric(stream.sample_rate.as_deref())),
            Some("video") => Track::video(id)
                .with_dimensions(stream.width.unwrap_or(0), stream.height.unwrap_or(0))
                .with_frame_rate(parse_frame_rate(
                    stream
                        .r_frame_rate
                        .as_deref()
                        .or(stream.avg_frame_rate.as_deref()),
                ))
                .with_pixel_aspect_ratio(parse_aspect_ratio(
                    stream.sample_aspect_ratio.as_deref(),
                )),
            Some("subtitle") => Track::subtitle(id),
            _ => continue,
        };

        track.language = stream.tags.as_ref().and_then(|t| t.language.clone());
        track.description = stream.tags.as_ref().and_then(|t| t.title.clone());
        tracks.push(track);
    }

    Ok(tracks)
}

/// ffprobe reports numeric fields like sample_rate as strings.
fn parse_numeric(value: Option<&str>) -> u32 {
    value.and_then(|v| v.parse::<u32>().ok()).unwrap_or(0)
}

/// Parse an ffprobe "num/den" rational frame rate.
fn parse_frame_rate(rate_str: Option<&str>) -> f32 {
    rate_str
        .and_then(|s| {
            let (num, den) = s.split_once('/')?;
            let num = num.parse::<f32>().ok()?;
            let den = den.parse::<f32>().ok()?;
            if den > 0.0 { Some(num / den) } else { None }
        })
        .unwrap_or(0.0)
}

/// Parse an ffprobe "num:den" sample aspect ratio, defaulting to square.
fn parse_aspect_ratio(ratio_str: Option<&str>) -> f32 {
    ratio_str
        .and_then(|s| {
            let (num, den) = s.split_once(':')?;
            let num = num.parse::<f32>().ok()?;
            let den = den.parse::<f32>().ok()?;
            if num > 0.0 && den > 0.0 { Some(num / den) } else { None }
        })
        .unwrap_or(1.0)
}

/// Run ffprobe with arguments.
fn run_ffprobe(args: &[&str]) -> Result<String, AppError> {
    let output = Command::new("ffprobe")
        .args(args)
        .output()
        .map_err(|e| AppError::Probe(format!("Failed to execute ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::Probe(format!("ffprobe failed: {}", stderr)));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

// JSON deserialization structures

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<RawStream>,
}

#[derive(Debug, Deserialize)]
struct RawStream {
    index: Option<u32>,
    codec_type: Option<String>,
    channels: Option<u32>,
    sample_rate: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
    avg_frame_rate: Option<String>,
    sample_aspect_ratio: Option<String>,
    tags: Option<StreamTags>,
}

#[derive(Debug, Deserialize)]
struct StreamTags {
    language: Option<String>,
    title: Option<String>,
}
