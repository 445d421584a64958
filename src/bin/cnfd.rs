//! CLI front-end: one binary, one subcommand per decider. Each subcommand
//! shares `--input`/`-i`, `--timeout`/`-t` (default 120s), and
//! `--verbose`/`-v`; `cdcl` additionally takes `--solvers` and `--minimal`
//! (§6). Exit codes follow SAT-competition convention: 10 SAT, 20 UNSAT, 0
//! TIMEOUT.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use cnf_deciders::budget::Deadline;
use cnf_deciders::engine::{cdcl::CdclAdapter, dp, dpll, resolution, EngineReport};
use cnf_deciders::error::SolverError;
use cnf_deciders::parser::{parse_dimacs, ParsedCnf};

#[derive(Parser)]
#[command(name = "cnfd", about = "Resolution, Davis-Putnam, DPLL, and CDCL SAT deciders")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pure resolution (saturation).
    Resolution(EngineArgs),
    /// Davis-Putnam variable elimination.
    Dp(EngineArgs),
    /// DPLL backtracking search.
    Dpll(EngineArgs),
    /// Thin CDCL front-end boundary (out of scope; delegates to DPLL).
    Cdcl(CdclArgs),
}

#[derive(Args, Clone)]
struct EngineArgs {
    /// Path to the CNF file in DIMACS syntax.
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Wall-clock budget in seconds.
    #[arg(short = 't', long = "timeout", default_value_t = 120)]
    timeout: u64,

    /// Periodic progress lines (raises the log filter to debug).
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Args)]
struct CdclArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Comma-separated external engines to select among: g3, g4, cd, m22.
    #[arg(long = "solvers", default_value = "g3,g4,cd,m22")]
    solvers: String,

    /// Run a hardcoded self-test formula instead of reading --input.
    #[arg(long = "minimal")]
    minimal: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbose = match &cli.command {
        Command::Resolution(a) | Command::Dp(a) | Command::Dpll(a) => a.verbose,
        Command::Cdcl(a) => a.engine.verbose,
    };
    init_logging(verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).init();
}

fn run(command: Command) -> Result<ExitCode, SolverError> {
    match command {
        Command::Resolution(args) => {
            let (parsed, deadline) = load(&args)?;
            let report = resolution::saturate(&parsed.clauses, &deadline, args.verbose);
            print_report("resolution steps", &report, &deadline);
            Ok(exit_code(&report))
        }
        Command::Dp(args) => {
            let (parsed, deadline) = load(&args)?;
            let report = dp::solve(&parsed.clauses, &deadline, args.verbose);
            print_report("recursive calls", &report, &deadline);
            Ok(exit_code(&report))
        }
        Command::Dpll(args) => {
            let (parsed, deadline) = load(&args)?;
            let report = dpll::solve(&parsed.clauses, &deadline, args.verbose);
            print_report("recursive calls", &report, &deadline);
            Ok(exit_code(&report))
        }
        Command::Cdcl(args) => {
            let solvers = cnf_deciders::engine::cdcl::parse_solver_list(&args.solvers)
                .map_err(SolverError::InvalidFormat)?;
            let adapter = CdclAdapter::new(solvers);
            let deadline = Deadline::starting_now(Duration::from_secs(args.engine.timeout));

            let formula = if args.minimal {
                cnf_deciders::engine::cdcl::minimal_test_formula()
            } else {
                let parsed = open_and_parse(&args.engine.input)?;
                parsed.clauses
            };

            let report = adapter.solve(&formula, &deadline, args.engine.verbose);
            print_report("recursive calls", &report, &deadline);
            Ok(exit_code(&report))
        }
    }
}

fn load(args: &EngineArgs) -> Result<(ParsedCnf, Deadline), SolverError> {
    let parsed = open_and_parse(&args.input)?;
    let deadline = Deadline::starting_now(Duration::from_secs(args.timeout));
    Ok((parsed, deadline))
}

fn open_and_parse(path: &PathBuf) -> Result<ParsedCnf, SolverError> {
    let file = File::open(path)?;
    parse_dimacs(BufReader::new(file))
}

fn print_report(step_label: &str, report: &EngineReport, deadline: &Deadline) {
    println!("{}", report.verdict.label());
    println!("{step_label}: {}", report.steps);
    println!("elapsed: {:.2}s", deadline.elapsed().as_secs_f64());
}

fn exit_code(report: &EngineReport) -> ExitCode {
    ExitCode::from(report.verdict.exit_code() as u8)
}
