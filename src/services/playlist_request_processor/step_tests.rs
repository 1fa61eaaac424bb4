use super::types::{MatchRunState, RunPhase, TrackHandle};

fn track(id: &str) -> TrackHandle {
    TrackHandle {
        id: id.into(),
        title: "Crying".into(),
        artist: "Roy Orbison".into(),
    }
}

#[test]
fn should_start_in_idle_phase() {
    let state = MatchRunState::default();

    assert_eq!(state.phase, RunPhase::Idle)
}

#[test]
fn should_enter_searching_phase_when_pass_begins() {
    let mut state = MatchRunState::default();

    state.begin_pass().unwrap();

    assert_eq!(state.phase, RunPhase::Searching)
}

#[test]
fn should_reject_new_pass_while_searching() {
    let mut state = MatchRunState::default();

    state.begin_pass().unwrap();

    assert!(state.begin_pass().is_err())
}

#[test]
fn should_enter_done_phase_when_pass_finishes() {
    let mut state = MatchRunState::default();

    state.begin_pass().unwrap();
    state.finish_pass();

    assert_eq!(state.phase, RunPhase::Done)
}

#[test]
fn should_allow_restarting_a_finished_pass() {
    let mut state = MatchRunState::default();

    state.begin_pass().unwrap();
    state.push_matched(track("1"));
    state.finish_pass();

    state.begin_pass().unwrap();

    assert_eq!(state.phase, RunPhase::Searching);
    assert!(state.matched_tracks.is_empty())
}

#[test]
fn should_accumulate_matched_tracks_in_order() {
    let mut state = MatchRunState::default();

    state.begin_pass().unwrap();
    state.push_matched(track("1"));
    state.push_matched(track("2"));

    let ids = state
        .matched_tracks
        .iter()
        .map(|t| t.id.as_str())
        .collect::<Vec<_>>();

    assert_eq!(ids, vec!["1", "2"])
}
