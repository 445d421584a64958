//! Unit propagation and pure-literal elimination, shared by the DP and
//! DPLL engines (the teacher kept these DPLL-only; the spec asks the DP
//! engine to apply the identical simplifications after each elimination
//! step, so this is lifted into its own module rather than duplicated).
//!
//! Both operate on a [`Formula`] (a `Vec<Clause>`) functionally: they
//! consume one formula and produce a fresh one, never mutating in place.

use crate::clause::{Clause, Formula};
use crate::types::Lit;

/// Signalled when unit propagation derives an empty clause or assigns a
/// variable two different ways. Not an error; a control-flow value the
/// engines turn into an UNSAT verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict;

/// Repeatedly selects a unit clause, assigns its literal, drops every
/// clause it satisfies, and strips its negation from the rest, to
/// fixpoint. Returns the simplified formula, or [`Conflict`] if a clause
/// empties out or two unit clauses disagree on a variable.
pub fn unit_propagate(formula: Formula) -> Result<Formula, Conflict> {
    let mut clauses = formula;
    loop {
        let unit = clauses.iter().find_map(|c| c.unit_literal());
        let Some(lit) = unit else {
            return Ok(clauses);
        };

        let mut next = Vec::with_capacity(clauses.len());
        for c in clauses {
            if c.contains(lit) {
                continue; // satisfied
            }
            if c.contains(lit.negate()) {
                let reduced: Vec<Lit> =
                    c.literals().iter().copied().filter(|&l| l != lit.negate()).collect();
                let reduced = Clause::from_literals(reduced);
                if reduced.is_empty() {
                    return Err(Conflict);
                }
                next.push(reduced);
            } else {
                next.push(c);
            }
        }
        clauses = next;
    }
}

/// Removes every clause containing a pure literal (one whose negation
/// doesn't occur anywhere in the formula), to fixpoint. Returns the
/// simplified formula and whether anything changed, determined by
/// comparing clause *counts*, not structurally comparing clause lists
/// (see `DESIGN.md`, Open Question 1): pure-literal elimination only ever
/// removes whole clauses, so a count comparison is exact and cheap.
pub fn pure_literal_eliminate(formula: Formula) -> (Formula, bool) {
    let mut clauses = formula;
    let mut changed_at_all = false;
    loop {
        let mut positive = std::collections::HashSet::new();
        let mut negative = std::collections::HashSet::new();
        for c in &clauses {
            for l in c {
                if l.is_neg() {
                    negative.insert(l.var());
                } else {
                    positive.insert(l.var());
                }
            }
        }
        let pure_pos: std::collections::HashSet<_> = positive.difference(&negative).copied().collect();
        let pure_neg: std::collections::HashSet<_> = negative.difference(&positive).copied().collect();
        if pure_pos.is_empty() && pure_neg.is_empty() {
            return (clauses, changed_at_all);
        }

        let before = clauses.len();
        clauses.retain(|c| {
            !c.literals().iter().any(|l| {
                (!l.is_neg() && pure_pos.contains(&l.var())) || (l.is_neg() && pure_neg.contains(&l.var()))
            })
        });
        if clauses.len() != before {
            changed_at_all = true;
        } else {
            return (clauses, changed_at_all);
        }
    }
}
