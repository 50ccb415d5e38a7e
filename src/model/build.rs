//! Record-to-graph pipeline: accumulate records, link parents, enforce the
//! parenting-age rule.
//!
//! Linking is two-pass. A parent may be declared on a later line than the
//! child, so raw parent names are held back until every record has been read
//! and the name lookup is complete.

use crate::model::{Person, PersonIndex};
use crate::record;
use crate::resolve::{ConflictPolicy, Decision};
use crate::validate;
use anyhow::Context;
use log::warn;
use std::fs;

/// Load the family CSV at `path` and run the full pipeline. The first line
/// is a header and is ignored.
///
/// An unreadable file or a malformed line fails the whole load; lifespan and
/// duplicate-name violations reject the single record and are reported via
/// the logger.
pub fn load_people(path: &str, policy: &mut dyn ConflictPolicy) -> anyhow::Result<PersonIndex> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read family csv {}", path))?;
    people_from_text(&text, policy).with_context(|| format!("load family csv {}", path))
}

/// Pipeline over in-memory CSV text (header line included). Split out of
/// [`load_people`] so callers holding the data need no file.
pub fn people_from_text(
    text: &str,
    policy: &mut dyn ConflictPolicy,
) -> anyhow::Result<PersonIndex> {
    let mut people = PersonIndex::new();
    let mut pending: Vec<(String, Vec<String>)> = Vec::new();

    for (lineno, line) in text.lines().enumerate().skip(1) {
        let lno = lineno + 1;
        if line.trim().is_empty() {
            continue;
        }

        let rec = record::parse_line(line).with_context(|| format!("line {}", lno))?;
        let person = Person {
            name: rec.name,
            birth_date: rec.birth_date,
            death_date: rec.death_date,
            parents: Vec::new(),
        };

        if let Err(violation) = validate::check_lifespan(&person) {
            warn!("rejected record at line {}: {}", lno, violation);
            continue;
        }
        if let Err(violation) = validate::check_unique(&people, &person.name) {
            warn!("rejected record at line {}: {}", lno, violation);
            continue;
        }

        pending.push((person.name.clone(), rec.parent_names));
        people.insert(person.name.clone(), person);
    }

    link_parents(&mut people, pending);
    enforce_parenting_age(&mut people, policy);

    Ok(people)
}

/// Pass 2: resolve raw parent names against the accepted set, in source
/// field order.
///
/// A name with no accepted match (a typo, or the parent's own record was
/// rejected) is dropped with a warning rather than failing the load.
fn link_parents(people: &mut PersonIndex, pending: Vec<(String, Vec<String>)>) {
    for (child, parent_names) in pending {
        for parent in parent_names {
            if people.contains_key(&parent) {
                if let Some(person) = people.get_mut(&child) {
                    person.parents.push(parent);
                }
            } else {
                warn!(
                    "{}: parent {:?} not found among accepted records, reference dropped",
                    child, parent
                );
            }
        }
    }
}

/// Post-link sweep: every (child, parent) pair must satisfy the parenting-age
/// rule. Each failing pair is put to the policy independently; a `Discard`
/// removes the child and ends its sweep, then checking continues with the
/// remaining people. Parents already discarded earlier in the sweep are
/// skipped.
fn enforce_parenting_age(people: &mut PersonIndex, policy: &mut dyn ConflictPolicy) {
    let names: Vec<String> = people.keys().cloned().collect();

    for name in names {
        let conflicts: Vec<_> = match people.get(&name) {
            Some(person) => person
                .parents
                .iter()
                .filter_map(|parent| people.get(parent))
                .filter_map(|parent| validate::check_parenting_age(person, parent).err())
                .collect(),
            None => continue,
        };

        for conflict in &conflicts {
            if policy.decide(conflict) == Decision::Discard {
                people.remove(&name);
                warn!("discarded {} after a parenting-age conflict", name);
                break;
            }
        }
    }
}
