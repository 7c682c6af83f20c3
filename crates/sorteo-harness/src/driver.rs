//! Applies model operations to a real session.

use sorteo_core::{Environment, Session, SessionError};

use crate::model::{ObservableState, Operation, Outcome};

/// Run `op` against `session` and report what happened.
pub fn apply<E: Environment>(session: &mut Session<E>, op: &Operation) -> Outcome {
    let result = match op {
        Operation::Admit { name } => session.admit(name.text()).map(Outcome::Admitted),
        Operation::Draw => session.draw().map(|winner| Outcome::Drew(winner.position)),
        Operation::Reset => {
            session.reset();
            Ok(Outcome::Reset)
        },
    };

    result.unwrap_or_else(|e| match e {
        SessionError::Rejected(reason) => Outcome::Rejected(reason),
        SessionError::Draw(rejection) => Outcome::Refused(rejection),
        other => Outcome::Failed(other.to_string()),
    })
}

/// Observable state of a real session, in the model's shape.
pub fn observe<E: Environment>(session: &Session<E>) -> ObservableState {
    ObservableState {
        names: session.roster().names().map(str::to_owned).collect(),
        drawn: session.engine().drawn().iter().copied().collect(),
        last_winner: session.last_winner_position(),
    }
}

#[cfg(test)]
mod tests {
    use sorteo_core::{DrawRejection, RejectionReason};

    use super::*;
    use crate::{model::NameChoice, sim_env::SimEnv};

    #[test]
    fn admit_maps_to_outcomes() {
        let mut session = Session::new(SimEnv::with_seed(0));

        let ana = Operation::Admit { name: NameChoice(0) };
        assert_eq!(apply(&mut session, &ana), Outcome::Admitted("Ana".to_string()));
        assert_eq!(apply(&mut session, &ana), Outcome::Rejected(RejectionReason::Duplicate));
    }

    #[test]
    fn draw_and_reset_map_to_outcomes() {
        let mut session = Session::new(SimEnv::with_seed(0));
        assert_eq!(
            apply(&mut session, &Operation::Draw),
            Outcome::Refused(DrawRejection::EmptyRoster)
        );

        apply(&mut session, &Operation::Admit { name: NameChoice(1) });
        assert_eq!(apply(&mut session, &Operation::Draw), Outcome::Drew(0));
        assert_eq!(observe(&session).last_winner, Some(0));

        assert_eq!(apply(&mut session, &Operation::Reset), Outcome::Reset);
        assert!(observe(&session).names.is_empty());
    }
}
