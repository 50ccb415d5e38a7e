//! Domain checks applied at the pipeline's validation points.
//!
//! Lifespan and uniqueness run per record before linking; the parenting-age
//! check runs after linking because it needs both parties' dates. The first
//! two reject a single record, the third raises a conflict that the caller
//! resolves interactively.

use crate::model::{Person, PersonIndex};
use chrono::{Months, NaiveDate};
use thiserror::Error;

/// A child must be born at least this many years after each parent.
pub const MIN_PARENTING_AGE_YEARS: u32 = 15;

/// Per-record violations detected before parent links are resolved.
///
/// Both reject the offending record only; loading continues with the next
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordViolation {
    #[error("{name} died on {death} before being born on {birth}")]
    NegativeLifespan {
        name: String,
        birth: NaiveDate,
        death: NaiveDate,
    },

    #[error("{name} appears in the input more than once")]
    DuplicateName { name: String },
}

/// A resolved parent link with an implausible age relationship. Carries both
/// parties so the operator can identify them; resolution (keep or discard
/// the child) happens in `resolve`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{parent} cannot be a parent of {child}")]
pub struct ParentingConflict {
    pub child: Person,
    pub parent: Person,
}

/// Death must not precede birth.
pub fn check_lifespan(person: &Person) -> Result<(), RecordViolation> {
    match person.death_date {
        Some(death) if death < person.birth_date => Err(RecordViolation::NegativeLifespan {
            name: person.name.clone(),
            birth: person.birth_date,
            death,
        }),
        _ => Ok(()),
    }
}

/// Names identify people; a second record under an accepted name is rejected.
pub fn check_unique(people: &PersonIndex, name: &str) -> Result<(), RecordViolation> {
    if people.contains_key(name) {
        return Err(RecordViolation::DuplicateName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// The child must be born at least [`MIN_PARENTING_AGE_YEARS`] after the
/// parent, and not after the parent's death. Equality at either boundary is
/// acceptable.
pub fn check_parenting_age(child: &Person, parent: &Person) -> Result<(), ParentingConflict> {
    let min_birth = parent.birth_date + Months::new(12 * MIN_PARENTING_AGE_YEARS);
    let too_young = child.birth_date < min_birth;
    let died_before = parent
        .death_date
        .is_some_and(|death| child.birth_date > death);

    if too_young || died_before {
        return Err(ParentingConflict {
            child: child.clone(),
            parent: parent.clone(),
        });
    }
    Ok(())
}
