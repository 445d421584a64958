//! DIMACS CNF format parser.
//!
//! Reads a UTF-8 text stream line by line. Blank lines and lines whose first
//! non-whitespace character is `c` (comment) or `%` (an end-of-formula
//! sentinel some archives append before a trailing footer) are skipped. A
//! `p cnf <vars> <clauses>` header is optional; if present and its type token
//! isn't `cnf`, parsing fails with [`SolverError::InvalidFormat`]. Every
//! other line is whitespace-separated signed integers terminated
//! (optionally) by a trailing `0`, which is stripped.
//!
//! Parsing is tolerant: a token that doesn't parse as an integer is skipped
//! rather than rejecting the whole file (see `DESIGN.md`, Open Question 3).
//! An empty clause surviving into the output is preserved: it correctly
//! forces UNSAT downstream, and is logged as a warning.

use std::collections::BTreeSet;
use std::io::BufRead;

use crate::clause::{Clause, Formula};
use crate::error::SolverError;
use crate::types::{Lit, Var};

/// The parsed result: the clause set (as a sequence - callers needing set
/// semantics fold it themselves, see [`crate::clause::Formula`]), the
/// variables actually mentioned, and the header-declared variable count
/// (`0` if no header was present).
pub struct ParsedCnf {
    pub clauses: Formula,
    pub mentioned_vars: BTreeSet<Var>,
    pub declared_vars: usize,
}

pub fn parse_dimacs<R: BufRead>(reader: R) -> Result<ParsedCnf, SolverError> {
    let mut clauses = Vec::new();
    let mut mentioned_vars = BTreeSet::new();
    let mut declared_vars = 0usize;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        match line.chars().next() {
            None | Some('c') | Some('%') => continue,
            Some('p') => {
                declared_vars = parse_header(line)?;
                continue;
            }
            _ => {}
        }

        let raw: Vec<i64> = line
            .split_whitespace()
            .filter_map(|tok| tok.parse::<i64>().ok()) // tolerant mode: skip unparseable tokens
            .collect();

        if raw.is_empty() {
            continue;
        }

        let mut raw = raw;
        if raw.last() == Some(&0) {
            raw.pop();
        }

        let mut lits = Vec::with_capacity(raw.len());
        for n in raw {
            if n == 0 {
                continue;
            }
            let var = (n.unsigned_abs() - 1) as Var;
            mentioned_vars.insert(var);
            lits.push(Lit::new(var, n < 0));
        }

        let clause = Clause::from_literals(lits);
        if clause.is_empty() {
            log::warn!("preserving empty clause from input line {:?}: formula is UNSAT", line);
        }
        clauses.push(clause);
    }

    Ok(ParsedCnf { clauses, mentioned_vars, declared_vars })
}

fn parse_header(line: &str) -> Result<usize, SolverError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    // parts[0] == "p"
    let kind = parts.get(1).copied().unwrap_or("");
    if kind != "cnf" {
        return Err(SolverError::InvalidFormat(format!(
            "expected a 'cnf' problem line, found {:?}",
            line
        )));
    }
    Ok(parts.get(2).and_then(|s| s.parse::<usize>().ok()).unwrap_or(0))
}
