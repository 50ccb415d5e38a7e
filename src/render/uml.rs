//! PlantUML object-diagram serialization of the person graph.
//!
//! The output is a complete text document: begin marker, one node
//! declaration per person, one `parent --> child` edge per resolved link,
//! end marker. Node identifiers are display names with the whitespace
//! stripped; identifier uniqueness follows from name uniqueness in the
//! index.

use crate::model::{Person, PersonIndex};
use anyhow::bail;

pub const DIAGRAM_START: &str = "@startuml";
pub const DIAGRAM_END: &str = "@enduml";

/// Diagram node identifier: the display name with all whitespace removed.
pub fn identifier(name: &str) -> String {
    name.split_whitespace().collect()
}

fn object_line(person: &Person) -> String {
    format!("object {}", identifier(&person.name))
}

fn edge_line(parent: &str, child: &str) -> String {
    format!("{} --> {}", identifier(parent), identifier(child))
}

/// Whole-population diagram with default styling.
pub fn render_population(people: &PersonIndex) -> String {
    render_population_with(people, |line| line, |_| false)
}

/// Whole-population diagram with two independently injectable strategies:
/// `select` picks the people whose node declaration is rewritten by `post`;
/// everyone else is emitted in default form. Edges pointing at people no
/// longer in the index (discarded after a conflict) are pruned.
pub fn render_population_with(
    people: &PersonIndex,
    post: impl Fn(String) -> String,
    select: impl Fn(&Person) -> bool,
) -> String {
    let mut out = String::new();
    out.push_str(DIAGRAM_START);
    out.push('\n');

    for person in people.values() {
        let line = object_line(person);
        let line = if select(person) { post(line) } else { line };
        out.push_str(&line);
        out.push('\n');
    }

    for child in people.values() {
        for parent in &child.parents {
            if people.contains_key(parent) {
                out.push_str(&edge_line(parent, &child.name));
                out.push('\n');
            }
        }
    }

    out.push_str(DIAGRAM_END);
    out.push('\n');
    out
}

/// Diagram of one person and their direct parents only (not transitive
/// ancestors). Parents missing from the index are pruned along with their
/// edges.
pub fn render_person(people: &PersonIndex, name: &str) -> anyhow::Result<String> {
    let Some(person) = people.get(name) else {
        bail!("no such person: {:?}", name);
    };

    let mut out = String::new();
    out.push_str(DIAGRAM_START);
    out.push('\n');
    out.push_str(&object_line(person));
    out.push('\n');

    for parent in &person.parents {
        if let Some(parent_person) = people.get(parent) {
            out.push_str(&object_line(parent_person));
            out.push('\n');
            out.push_str(&edge_line(parent, &person.name));
            out.push('\n');
        }
    }

    out.push_str(DIAGRAM_END);
    out.push('\n');
    Ok(out)
}
