use super::*;

// =============================================================
// RemoteData accessors
// =============================================================

#[test]
fn default_is_idle() {
    let state: RemoteData<u32> = RemoteData::default();
    assert_eq!(state, RemoteData::Idle);
    assert!(!state.is_loading());
    assert!(state.ready().is_none());
    assert!(state.error().is_none());
}

#[test]
fn ready_exposes_value_only_in_ready() {
    assert_eq!(RemoteData::Ready(5).ready(), Some(&5));
    assert_eq!(RemoteData::<u32>::Loading.ready(), None);
}

#[test]
fn error_exposes_message_only_in_failed() {
    let state: RemoteData<u32> = RemoteData::Failed("boom".to_owned());
    assert_eq!(state.error(), Some("boom"));
    assert_eq!(RemoteData::Ready(1).error(), None);
}

// =============================================================
// zip: all-or-nothing join
// =============================================================

#[test]
fn zip_yields_both_values_on_success() {
    let joined: Result<(u32, &str), String> = zip(Ok(1), Ok("two"));
    assert_eq!(joined, Ok((1, "two")));
}

#[test]
fn zip_surfaces_first_failure() {
    let joined: Result<(u32, u32), &str> = zip(Err("left"), Err("right"));
    assert_eq!(joined, Err("left"));

    let joined: Result<(u32, u32), &str> = zip(Ok(1), Err("right"));
    assert_eq!(joined, Err("right"));
}
