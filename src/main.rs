use anyhow::Context as _;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use trackpick::config::{AppConfig, SampleRatePolicy};
use trackpick::{analyzer, tracks, utils};
use trackpick::{Track, TrackKind, TrackPreference};

#[derive(Parser)]
#[command(name = "trackpick", version, about = "Select and label media tracks")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List audio tracks with display labels
    List {
        /// Media file to probe with ffprobe
        input: Option<String>,
        /// Read an ffprobe JSON dump instead of probing
        #[arg(long, value_name = "PATH")]
        tracks_json: Option<PathBuf>,
        /// When to include the sample-rate clause
        #[arg(long, value_enum)]
        sample_rate: Option<SampleRatePolicy>,
    },
    /// Pick the best matching audio track
    Pick {
        /// Media file to probe with ffprobe
        input: Option<String>,
        /// Read an ffprobe JSON dump instead of probing
        #[arg(long, value_name = "PATH")]
        tracks_json: Option<PathBuf>,
        /// Id of a previously selected track
        #[arg(long)]
        track_id: Option<String>,
        /// Preferred language (ISO 639 code)
        #[arg(long)]
        language: Option<String>,
        /// Preferred audio channel count
        #[arg(long)]
        channels: Option<u32>,
    },
    /// Print the diagnostic representation of every track
    Show {
        /// Media file to probe with ffprobe
        input: Option<String>,
        /// Read an ffprobe JSON dump instead of probing
        #[arg(long, value_name = "PATH")]
        tracks_json: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let _guard = utils::logger::init_logging();
    let cli = Cli::parse();

    let config = AppConfig::load();
    config.validate()?;

    match cli.command {
        Command::List {
            input,
            tracks_json,
            sample_rate,
        } => {
            let tracks = load_tracks(input.as_deref(), tracks_json.as_deref())?;
            list_tracks(&tracks, sample_rate.unwrap_or(config.display.sample_rate));
        }
        Command::Pick {
            input,
            tracks_json,
            track_id,
            language,
            channels,
        } => {
            let tracks = load_tracks(input.as_deref(), tracks_json.as_deref())?;
            let pref = TrackPreference {
                track_id,
                language: language.or_else(|| config.selection.preferred_language.clone()),
                channel_count: channels.unwrap_or(config.selection.preferred_channel_count),
            };
            pick_track(&tracks, &pref, config.display.sample_rate);
        }
        Command::Show { input, tracks_json } => {
            let tracks = load_tracks(input.as_deref(), tracks_json.as_deref())?;
            if tracks.is_empty() {
                println!("no tracks");
            }
            for track in &tracks {
                println!("{}", track);
            }
        }
    }

    Ok(())
}

fn load_tracks(input: Option<&str>, tracks_json: Option<&Path>) -> anyhow::Result<Vec<Track>> {
    match (input, tracks_json) {
        (_, Some(path)) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(analyzer::parse_streams(&json)?)
        }
        (Some(path), None) => Ok(analyzer::probe(path)?),
        (None, None) => anyhow::bail!("either a media file or --tracks-json is required"),
    }
}

fn audio_tracks(tracks: &[Track]) -> Vec<Track> {
    tracks
        .iter()
        .filter(|t| t.kind == TrackKind::Audio)
        .cloned()
        .collect()
}

fn show_sample_rate(policy: SampleRatePolicy, audio: &[Track]) -> bool {
    match policy {
        SampleRatePolicy::Always => true,
        SampleRatePolicy::Never => false,
        SampleRatePolicy::Auto => tracks::needs_sample_rate(audio),
    }
}

fn list_tracks(tracks: &[Track], policy: SampleRatePolicy) {
    if tracks.is_empty() {
        println!("no tracks");
        return;
    }

    let audio = audio_tracks(tracks);
    let show = show_sample_rate(policy, &audio);
    for track in &audio {
        println!("{}: {}", track.id, tracks::audio_label(track, show));
    }
    for track in tracks.iter().filter(|t| t.kind != TrackKind::Audio) {
        println!("{}", track);
    }
}

fn pick_track(tracks: &[Track], pref: &TrackPreference, policy: SampleRatePolicy) {
    let audio = audio_tracks(tracks);
    debug!(candidates = audio.len(), ?pref, "selecting audio track");

    match tracks::select_best_track(&audio, pref) {
        Some(best) => {
            let show = show_sample_rate(policy, &audio);
            println!("{}: {}", best.id, tracks::audio_label(best, show));
        }
        None => println!("no tracks"),
    }
}
