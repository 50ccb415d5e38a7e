//! Person model and population queries.

pub mod build;

pub use build::{load_people, people_from_text};

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

const DATE_DISPLAY: &str = "%d.%m.%Y";

/// A single person in the loaded family tree.
///
/// `parents` holds resolved parent names in source-column order. They are
/// references into the owning [`PersonIndex`], not owned values, so removing
/// a person never requires graph-wide cleanup; stale references are pruned
/// when a diagram is rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    pub name: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
    pub parents: Vec<String>,
}

/// The working set, keyed by exact display name. Name uniqueness is enforced
/// at insert time; BTreeMap iteration keeps rendering deterministic.
pub type PersonIndex = BTreeMap<String, Person>;

impl Person {
    pub fn is_living(&self) -> bool {
        self.death_date.is_none()
    }

    /// Lifespan in days; `None` while the person is living.
    pub fn lifespan_days(&self) -> Option<i64> {
        self.death_date
            .map(|death| (death - self.birth_date).num_days())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - ", self.name, self.birth_date.format(DATE_DISPLAY))?;
        if let Some(death) = self.death_date {
            write!(f, "{}", death.format(DATE_DISPLAY))?;
        }
        write!(f, ")")
    }
}

/// People whose display name contains `needle` (case-sensitive).
pub fn filter_by_name<'a>(people: &'a PersonIndex, needle: &str) -> Vec<&'a Person> {
    people
        .values()
        .filter(|p| p.name.contains(needle))
        .collect()
}

/// All people, earliest birth first.
pub fn sorted_by_birth(people: &PersonIndex) -> Vec<&Person> {
    let mut out: Vec<&Person> = people.values().collect();
    out.sort_by_key(|p| p.birth_date);
    out
}

/// Deceased people only, longest lifespan first.
pub fn sorted_by_lifespan(people: &PersonIndex) -> Vec<&Person> {
    let mut out: Vec<&Person> = people.values().filter(|p| !p.is_living()).collect();
    out.sort_by_key(|p| std::cmp::Reverse(p.lifespan_days()));
    out
}

/// The earliest-born person without a death date.
pub fn oldest_living(people: &PersonIndex) -> Option<&Person> {
    people
        .values()
        .filter(|p| p.is_living())
        .min_by_key(|p| p.birth_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn person(name: &str, birth: (i32, u32, u32), death: Option<(i32, u32, u32)>) -> Person {
        Person {
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
            death_date: death.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            parents: Vec::new(),
        }
    }

    fn index(people: Vec<Person>) -> PersonIndex {
        people.into_iter().map(|p| (p.name.clone(), p)).collect()
    }

    #[test]
    fn display_shows_open_ended_lifespan_for_living() {
        let p = person("Alice Smith", (1990, 1, 1), None);
        assert_eq!(p.to_string(), "Alice Smith (01.01.1990 - )");
        let p = person("Jan Kowalski", (1950, 11, 5), Some((2010, 3, 20)));
        assert_eq!(p.to_string(), "Jan Kowalski (05.11.1950 - 20.03.2010)");
    }

    #[test]
    fn filter_matches_substring_case_sensitively() {
        let people = index(vec![
            person("Jan Kowalski", (1950, 1, 1), None),
            person("Anna Kowalska", (1980, 1, 1), None),
            person("Eva Nowak", (1985, 1, 1), None),
        ]);
        let hits = filter_by_name(&people, "Kowalsk");
        assert_eq!(hits.len(), 2);
        assert!(filter_by_name(&people, "kowalsk").is_empty());
    }

    #[test]
    fn birth_sort_is_ascending() {
        let people = index(vec![
            person("B", (1980, 1, 1), None),
            person("A", (1990, 1, 1), None),
            person("C", (1950, 1, 1), None),
        ]);
        let names: Vec<&str> = sorted_by_birth(&people)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn lifespan_sort_skips_living_and_puts_longest_first() {
        let people = index(vec![
            person("Short", (1900, 1, 1), Some((1950, 1, 1))),
            person("Long", (1900, 1, 1), Some((1990, 1, 1))),
            person("Living", (1900, 1, 1), None),
        ]);
        let names: Vec<&str> = sorted_by_lifespan(&people)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Long", "Short"]);
    }

    #[test]
    fn oldest_living_ignores_the_dead() {
        let people = index(vec![
            person("Dead Elder", (1880, 1, 1), Some((1960, 1, 1))),
            person("Older", (1930, 1, 1), None),
            person("Younger", (1960, 1, 1), None),
        ]);
        assert_eq!(oldest_living(&people).unwrap().name, "Older");

        let all_dead = index(vec![person("Gone", (1900, 1, 1), Some((1980, 1, 1)))]);
        assert!(oldest_living(&all_dead).is_none());
    }
}
