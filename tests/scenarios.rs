//! Library-level scenario tests: the DIMACS instances named in the spec's
//! scenario table (§8, S1-S6), run against all three core engines, plus the
//! cross-engine agreement invariants and a random 3-CNF stress battery.

use std::time::Duration;

use cnf_deciders::budget::Deadline;
use cnf_deciders::clause::{Clause, Formula};
use cnf_deciders::engine::{dp, dpll, resolution, Verdict};
use cnf_deciders::parser::parse_dimacs;
use cnf_deciders::types::Lit;

fn ample() -> Deadline {
    Deadline::starting_now(Duration::from_secs(5))
}

fn parse(src: &str) -> Formula {
    parse_dimacs(src.as_bytes()).expect("parse failed").clauses
}

fn lit(v: usize, neg: bool) -> Lit {
    Lit::new(v, neg)
}

fn c(lits: &[Lit]) -> Clause {
    Clause::from_literals(lits.iter().copied())
}

fn all_engines_agree(formula: &Formula, expected: Verdict) {
    assert_eq!(resolution::saturate(formula, &ample(), false).verdict, expected, "resolution");
    assert_eq!(dp::solve(formula, &ample(), false).verdict, expected, "dp");
    assert_eq!(dpll::solve(formula, &ample(), false).verdict, expected, "dpll");
}

// S1: {{1,2}, {-1,3}} - satisfiable.
#[test]
fn scenario_s1_is_sat() {
    let formula = parse("p cnf 3 2\n1 2 0\n-1 3 0\n");
    all_engines_agree(&formula, Verdict::Satisfiable);
}

// S2: {{1}, {-1}} - a direct contradiction.
#[test]
fn scenario_s2_is_unsat() {
    let formula = parse("p cnf 1 2\n1 0\n-1 0\n");
    all_engines_agree(&formula, Verdict::Unsatisfiable);
}

// S3: {{1,2}, {-1,2}, {1,-2}, {-1,-2}} - two-variable exhaustion,
// pigeonhole-style - unsatisfiable.
#[test]
fn scenario_s3_is_unsat() {
    let formula = parse("p cnf 2 4\n1 2 0\n-1 2 0\n1 -2 0\n-1 -2 0\n");
    all_engines_agree(&formula, Verdict::Unsatisfiable);
}

// S4: {{1,-2}, {2,-3}, {3,-1}, {-1,-2,-3}, {1,2,3}} - satisfiable.
#[test]
fn scenario_s4_is_sat() {
    let formula = parse("p cnf 3 5\n1 -2 0\n2 -3 0\n3 -1 0\n-1 -2 -3 0\n1 2 3 0\n");
    all_engines_agree(&formula, Verdict::Satisfiable);
}

// S5: {{1,2,3}, {-1}, {-2}, {-3}} - unsatisfiable.
#[test]
fn scenario_s5_is_unsat() {
    let formula = parse("p cnf 3 4\n1 2 3 0\n-1 0\n-2 0\n-3 0\n");
    all_engines_agree(&formula, Verdict::Unsatisfiable);
}

// S6: {{1,2}, {2,3}, {-1,-3}} - satisfiable (e.g. x2 = true).
#[test]
fn scenario_s6_is_sat() {
    let formula = parse("p cnf 3 3\n1 2 0\n2 3 0\n-1 -3 0\n");
    all_engines_agree(&formula, Verdict::Satisfiable);
}

#[test]
fn tautologies_never_change_the_verdict() {
    let base = parse("p cnf 3 2\n1 2 0\n-1 3 0\n");
    let mut with_taut = base.clone();
    with_taut.push(c(&[lit(9, false), lit(9, true)]));
    all_engines_agree(&base, Verdict::Satisfiable);
    all_engines_agree(&with_taut, Verdict::Satisfiable);
}

#[test]
fn duplicate_clauses_never_change_the_verdict() {
    let base = vec![c(&[lit(0, false)]), c(&[lit(0, true)])];
    let mut with_dup = base.clone();
    with_dup.push(c(&[lit(0, false)]));
    all_engines_agree(&base, Verdict::Unsatisfiable);
    all_engines_agree(&with_dup, Verdict::Unsatisfiable);
}

#[test]
fn pigeonhole_four_into_three_is_unsat_across_engines() {
    // 4 pigeons, 3 holes: classic UNSAT instance, kept small enough for
    // resolution's quadratic round cost to stay fast.
    let n = 3;
    let mut clauses = Vec::new();
    for pigeon in 0..=n {
        let lits: Vec<Lit> = (0..n).map(|hole| lit(pigeon * n + hole, false)).collect();
        clauses.push(c(&lits));
    }
    for hole in 0..n {
        for p1 in 0..=n {
            for p2 in (p1 + 1)..=n {
                clauses.push(c(&[lit(p1 * n + hole, true), lit(p2 * n + hole, true)]));
            }
        }
    }
    assert_eq!(dp::solve(&clauses, &ample(), false).verdict, Verdict::Unsatisfiable);
    assert_eq!(dpll::solve(&clauses, &ample(), false).verdict, Verdict::Unsatisfiable);
}

// A minimal linear congruential generator so the stress battery is
// reproducible without pulling randomness into a no-Date/no-random
// constrained environment at test time; `rand` (a dev-dependency) drives
// seed selection, but this local generator makes each seed deterministic
// for the assertions below.
fn random_3cnf(num_vars: usize, num_clauses: usize, seed: u64) -> Formula {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    let mut formula = Vec::with_capacity(num_clauses);
    for _ in 0..num_clauses {
        let mut lits = Vec::with_capacity(3);
        for _ in 0..3 {
            let var = rng.gen_range(0..num_vars);
            let neg = rng.gen_bool(0.5);
            lits.push(Lit::new(var, neg));
        }
        formula.push(Clause::from_literals(lits));
    }
    formula
}

#[test]
fn random_3cnf_battery_dpll_is_deterministic() {
    // At clause/variable ratio 4.2, random 3-CNF sits well past the SAT/UNSAT
    // phase transition threshold (~4.27), so most instances here are UNSAT;
    // the property under test is determinism, not satisfiability rate.
    for n in [10usize, 15, 20] {
        let num_clauses = (4.2 * n as f64).round() as usize;
        for seed in 0..5u64 {
            let formula = random_3cnf(n, num_clauses, seed * 1000 + n as u64);
            let a = dpll::solve(&formula, &ample(), false);
            let b = dpll::solve(&formula, &ample(), false);
            assert_eq!(a.verdict, b.verdict);
            assert_eq!(a.steps, b.steps);
        }
    }
}

#[test]
fn unit_propagation_alone_resolves_a_fully_unit_formula() {
    let formula = parse("p cnf 3 3\n1 0\n-2 0\n3 0\n");
    all_engines_agree(&formula, Verdict::Satisfiable);
}
