//! Checks whether a card's declared bounded/forbidden actions and
//! escalation triggers are compatible with its BOUNDARY/FEAR conscience
//! values. A conflict (a boundary that negates a bounded action) is a hard
//! initialization failure for callers; an augmentation is informative only.

mod matching;
mod report;
mod validate;

pub use matching::{contains_negation, contains_whole_word, normalize_name};
pub use report::{AgreementAugmentation, AgreementConflict, AgreementReport};
pub use validate::validate;
