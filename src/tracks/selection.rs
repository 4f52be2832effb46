use std::cmp::Ordering;

use super::{Track, TrackPreference, language};

/// Ranks tracks against a preference; greater means a better candidate.
///
/// The policy is an ordered tie-break chain: previously selected id, then
/// language, then exact channel count, then more channels. A preference
/// without a stored language matches every track, and a preferred channel
/// count of 0 leaves both channel-count rules inert.
pub fn comparator(pref: &TrackPreference) -> impl Fn(&Track, &Track) -> Ordering + '_ {
    move |a, b| {
        id_matches(pref, a)
            .cmp(&id_matches(pref, b))
            .then_with(|| language_matches(pref, a).cmp(&language_matches(pref, b)))
            .then_with(|| {
                if pref.channel_count == 0 {
                    return Ordering::Equal;
                }
                let a_exact = a.channel_count == pref.channel_count;
                let b_exact = b.channel_count == pref.channel_count;
                a_exact
                    .cmp(&b_exact)
                    .then_with(|| a.channel_count.cmp(&b.channel_count))
            })
    }
}

fn id_matches(pref: &TrackPreference, track: &Track) -> bool {
    pref.track_id.as_deref() == Some(track.id.as_str())
}

fn language_matches(pref: &TrackPreference, track: &Track) -> bool {
    match pref.language.as_deref() {
        // No stored preference, any track language will do.
        None => true,
        Some(code) => language::is_same_language(track.language.as_deref(), Some(code)),
    }
}

/// Picks the best-ranked track, or `None` for an empty list.
///
/// Never synthesizes a track: the result is always an element of `tracks`.
/// Ties keep the earliest candidate, so a list where nothing matches any
/// preference falls back to its first track.
pub fn select_best_track<'a>(tracks: &'a [Track], pref: &TrackPreference) -> Option<&'a Track> {
    let cmp = comparator(pref);
    let mut best: Option<&Track> = None;
    for track in tracks {
        if best.is_none_or(|current| cmp(track, current) == Ordering::Greater) {
            best = Some(track);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNMATCHED_ID: &str = "no matching id";

    fn audio(id: &str, language: Option<&str>, channel_count: u32) -> Track {
        let mut track = Track::audio(id);
        track.language = language.map(str::to_string);
        track.channel_count = channel_count;
        track
    }

    fn pref(track_id: &str, language: Option<&str>, channel_count: u32) -> TrackPreference {
        TrackPreference {
            track_id: Some(track_id.to_string()),
            language: language.map(str::to_string),
            channel_count,
        }
    }

    fn all() -> Vec<Track> {
        vec![
            audio("1", Some("en"), 1),
            audio("2", Some("en"), 5),
            audio("3", Some("fr"), 8),
            audio("4", None, 2),
            audio("5", None, 6),
        ]
    }

    #[test]
    fn empty_list_selects_nothing() {
        let best = select_best_track(&[], &pref(UNMATCHED_ID, Some("en"), 1));
        assert_eq!(best, None);
    }

    #[test]
    fn exact_id_match() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref("1", Some("en"), 1)).unwrap();
        assert_eq!(best.id, "1");
    }

    #[test]
    fn id_match_beats_language_and_count() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref("4", Some("en"), 8)).unwrap();
        assert_eq!(best.id, "4");
    }

    #[test]
    fn id_match_with_wrong_language_and_count() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref("1", Some("kr"), 3)).unwrap();
        assert_eq!(best.id, "1");
    }

    #[test]
    fn language_and_count_match() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, Some("en"), 5)).unwrap();
        assert_eq!(best.id, "2");
    }

    #[test]
    fn language_only_match() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, Some("fr"), 1)).unwrap();
        assert_eq!(best.id, "3");
    }

    #[test]
    fn count_match_without_language_preference() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, None, 8)).unwrap();
        assert_eq!(best.id, "3");
    }

    #[test]
    fn no_match_falls_back_to_first() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, Some("kr"), 1)).unwrap();
        assert_eq!(best.id, "1");
    }

    #[test]
    fn no_match_with_unset_language_falls_back_to_first() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, None, 0)).unwrap();
        assert_eq!(best.id, "1");
    }

    #[test]
    fn id_and_count_match_among_unset_languages() {
        let tracks = vec![audio("4", None, 2), audio("5", None, 6)];
        let best = select_best_track(&tracks, &pref("5", None, 6)).unwrap();
        assert_eq!(best.id, "5");
    }

    #[test]
    fn higher_count_breaks_language_ties() {
        let tracks = vec![audio("a", Some("en"), 2), audio("b", Some("en"), 6)];
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, Some("en"), 4)).unwrap();
        assert_eq!(best.id, "b");
    }

    #[test]
    fn selection_is_stable_on_full_ties() {
        let tracks = vec![audio("a", Some("en"), 2), audio("b", Some("en"), 2)];
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, Some("en"), 4)).unwrap();
        assert_eq!(best.id, "a");
    }

    #[test]
    fn result_is_an_element_of_the_list() {
        let tracks = all();
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, Some("ja"), 3)).unwrap();
        assert!(tracks.iter().any(|t| std::ptr::eq(t, best)));
    }

    #[test]
    fn two_letter_and_three_letter_codes_match() {
        let tracks = vec![audio("1", Some("deu"), 2), audio("2", Some("eng"), 2)];
        let best = select_best_track(&tracks, &pref(UNMATCHED_ID, Some("en"), 0)).unwrap();
        assert_eq!(best.id, "2");
    }

    #[test]
    fn comparator_tie_break_chain() {
        let preference = pref("1", Some("en"), 1);
        let cmp = comparator(&preference);
        // Each entry outranks every earlier one.
        let ascending = [
            audio("9", Some("kr"), 1),
            audio("8", Some("en"), 3),
            audio("7", Some("en"), 5),
            audio("6", Some("en"), 1),
            audio("1", Some("kr"), 7),
        ];
        for (i, a) in ascending.iter().enumerate() {
            for (j, b) in ascending.iter().enumerate() {
                assert_eq!(cmp(a, b), i.cmp(&j), "rank {} vs rank {}", i, j);
            }
        }
    }

    #[test]
    fn count_rules_inert_without_count_preference() {
        let preference = pref(UNMATCHED_ID, Some("en"), 0);
        let cmp = comparator(&preference);
        let more = audio("a", Some("en"), 6);
        let fewer = audio("b", Some("en"), 2);
        assert_eq!(cmp(&more, &fewer), Ordering::Equal);

        let preference = pref(UNMATCHED_ID, Some("en"), 4);
        let cmp = comparator(&preference);
        assert_eq!(cmp(&more, &fewer), Ordering::Greater);
    }
}
