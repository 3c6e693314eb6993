use crate::errors::ProfileError;

/// Terms-of-service consent, checked once at submit time.
///
/// The submit control is not disabled while consent is missing: a submit is
/// rejected with `TermsNotAccepted` and the user may click again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsentGate {
    accepted: bool,
}

impl ConsentGate {
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }

    pub fn can_submit(&self) -> Result<(), ProfileError> {
        if self.accepted {
            Ok(())
        } else {
            Err(ProfileError::TermsNotAccepted)
        }
    }
}
