//! Keep/discard decisions for parenting-age conflicts.
//!
//! The decision point is a trait so the interactive prompt can be swapped
//! for a fixed policy in batch runs and tests.

use crate::validate::ParentingConflict;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Discard,
}

/// Decides the fate of a child involved in a parenting-age conflict. Only
/// the child is ever subject to removal; the parent and the link stay as
/// they are.
pub trait ConflictPolicy {
    fn decide(&mut self, conflict: &ParentingConflict) -> Decision;
}

/// Interactive policy: reports the conflict on stdout and reads one line
/// from stdin. Anything other than `n` keeps the child.
pub struct Prompt;

impl ConflictPolicy for Prompt {
    fn decide(&mut self, conflict: &ParentingConflict) -> Decision {
        println!("{conflict}");
        print!("Keep {}? [Y/n]: ", conflict.child.name);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return Decision::Keep;
        }
        match answer.trim() {
            "n" | "N" => Decision::Discard,
            _ => Decision::Keep,
        }
    }
}

/// Fixed policy for non-interactive runs: every child is kept.
pub struct KeepAll;

impl ConflictPolicy for KeepAll {
    fn decide(&mut self, _conflict: &ParentingConflict) -> Decision {
        Decision::Keep
    }
}
