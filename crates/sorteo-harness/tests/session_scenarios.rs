//! End-to-end session scenarios.

use proptest::prelude::*;
use sorteo_core::{
    DrawPhase, DrawRejection, RejectionReason, Session, SessionAction, SessionError, SessionEvent,
};
use sorteo_harness::SimEnv;

fn admit_all(session: &mut Session<SimEnv>, names: &[&str]) {
    for name in names {
        assert!(session.admit(name).is_ok(), "{name} should be admitted");
    }
}

#[test]
fn two_names_drawn_then_exhausted_then_reset() {
    let mut session = Session::new(SimEnv::with_seed(2024));
    admit_all(&mut session, &["Ana", "Beto"]);

    let first = session.draw().map(|w| w.position);
    assert!(matches!(first, Ok(0 | 1)));

    let second = session.draw().map(|w| w.position);
    assert_eq!(second.ok(), first.ok().map(|p| 1 - p));

    assert_eq!(session.draw(), Err(SessionError::Draw(DrawRejection::Exhausted)));

    session.reset();
    assert_eq!(session.roster().size(), 0);
    assert_eq!(session.remaining(), 0);
    assert_eq!(session.phase(), DrawPhase::Empty);
}

#[test]
fn admission_rejections() {
    let mut session = Session::new(SimEnv::with_seed(1));

    for (raw, reason) in [
        ("", RejectionReason::Empty),
        ("   ", RejectionReason::Empty),
        ("John3", RejectionReason::InvalidFormat),
        ("Ana-Maria!", RejectionReason::InvalidFormat),
    ] {
        assert_eq!(session.admit(raw), Err(SessionError::Rejected(reason)), "{raw:?}");
    }

    assert!(session.admit("Ana").is_ok());
    assert_eq!(session.admit("Ana"), Err(SessionError::Rejected(RejectionReason::Duplicate)));
    assert_eq!(session.roster().size(), 1);
}

#[test]
fn three_names_cover_every_position() {
    let mut session = Session::new(SimEnv::with_seed(3));
    admit_all(&mut session, &["Ana", "Beto", "Cata"]);

    for _ in 0..3 {
        assert!(session.draw().is_ok());
    }

    let drawn: Vec<_> = session.engine().drawn().iter().copied().collect();
    assert_eq!(drawn, [0, 1, 2]);
    assert_eq!(session.draw(), Err(SessionError::Draw(DrawRejection::Exhausted)));
}

#[test]
fn empty_roster_draw_refused() {
    let mut session = Session::new(SimEnv::with_seed(4));
    assert_eq!(session.draw(), Err(SessionError::Draw(DrawRejection::EmptyRoster)));
}

#[test]
fn event_api_reports_exhaustion_once() {
    let mut session = Session::new(SimEnv::with_seed(5));
    for raw in ["Ana", "Beto", "Cata"] {
        assert!(session.handle(SessionEvent::AdmitName { raw: raw.to_string() }).is_ok());
    }

    let mut exhaustion_notices = 0;
    for _ in 0..3 {
        let actions = session.handle(SessionEvent::Draw).unwrap_or_default();
        exhaustion_notices += actions
            .iter()
            .filter(|a| matches!(a, SessionAction::RosterExhausted { .. }))
            .count();
    }

    assert_eq!(exhaustion_notices, 1);
    assert!(session.handle(SessionEvent::Draw).is_err());
    assert!(session.can_reset());
}

proptest! {
    /// `remaining` drops by exactly one per draw and reaches 0 exactly at
    /// exhaustion.
    #[test]
    fn prop_remaining_counts_down(seed in any::<u64>(), n in 1usize..30) {
        let mut session = Session::new(SimEnv::with_seed(seed));
        for i in 0..n {
            // Distinct letter-only names: "A", "B", ..., "AA", ...
            let name = bijective_name(i);
            prop_assert!(session.admit(&name).is_ok());
        }

        for k in 0..n {
            prop_assert_eq!(session.remaining(), n - k);
            prop_assert_eq!(session.phase(), DrawPhase::Ready);
            let winner = session.draw();
            prop_assert!(winner.is_ok());
        }

        prop_assert_eq!(session.remaining(), 0);
        prop_assert_eq!(session.phase(), DrawPhase::Exhausted);
    }

    /// A reset session behaves exactly like a new one drawing from the same
    /// point in the random stream.
    #[test]
    fn prop_reset_matches_fresh_session(seed in any::<u64>(), warmup in 0usize..5) {
        let env = SimEnv::with_seed(seed);
        let mut used = Session::new(env.clone());
        admit_all(&mut used, &["Ana", "Beto", "Cata", "Dani", "Eli"]);
        for _ in 0..warmup {
            let _ = used.draw();
        }
        used.reset();

        prop_assert_eq!(used.roster().size(), 0);
        prop_assert_eq!(used.engine().drawn_count(), 0);
        prop_assert_eq!(used.last_winner(), None);
        prop_assert!(!used.can_reset());

        let mut fresh = Session::new(env.fork());
        for session in [&mut used, &mut fresh] {
            admit_all(session, &["Fede", "Gabi", "Hugo"]);
        }

        for _ in 0..4 {
            prop_assert_eq!(used.draw(), fresh.draw());
        }
    }
}

/// Spreadsheet-style column name for `i`: A..Z, AA..
fn bijective_name(mut i: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
