use super::*;

#[test]
fn anonymous_session_shows_not_logged_in() {
    let view = StatusView::for_session(&SessionState::default());
    assert_eq!(view, StatusView::Anonymous);
    assert_eq!(view.message(), "You are not logged in.");
    assert!(!view.offers_sign_out());
}

#[test]
fn signed_in_session_offers_sign_out() {
    let mut state = SessionState::default();
    state.begin_sign_in();
    let view = StatusView::for_session(&state);
    assert_eq!(view, StatusView::Welcome);
    assert_eq!(view.message(), "Welcome!");
    assert!(view.offers_sign_out());
}

#[test]
fn sign_out_action_follows_flag_through_transitions() {
    let mut state = SessionState::default();
    for signed_in in [true, false, true, false] {
        if signed_in {
            state.begin_sign_in();
        } else {
            state.begin_sign_out();
        }
        assert_eq!(StatusView::for_session(&state).offers_sign_out(), state.is_authenticated());
    }
}
