// Form core: sections, skill tags, consent, and the aggregate that owns them.
// Everything here is synchronous and in-memory; I/O lives in api_client and submission.

pub mod gating;
pub mod sections;
pub mod skills;
pub mod state;

pub use gating::ConsentGate;
pub use sections::{RepeatableSection, SectionKind, SectionRecord};
pub use skills::{Suggestions, TagSelector};
pub use state::{ProfileForm, ScalarField};
