//! Timing harness for the linear solvers
//!
//! Generates a synthetic system with a known solution, runs each strategy on
//! it and reports wall time, the method that produced the answer and the
//! largest deviation when the solution is substituted back.
//!
//! Usage:
//!     cargo run --release --bin linsolve-bench -- --unknowns 1000
//!     cargo run --release --bin linsolve-bench -- --unknowns 1000 --happy-path --solver fast-path-lu

use clap::{Parser, ValueEnum};
use math_audio_linsolve::parallel::is_parallel_available;
use math_audio_linsolve::{SolverConfig, SolverType, close_to_zero, deviations, generate, solve};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SolverArg {
    GaussJordan,
    Lu,
    FastPathGaussJordan,
    FastPathLu,
    All,
}

impl SolverArg {
    fn solver_types(self) -> Vec<SolverType> {
        match self {
            SolverArg::GaussJordan => vec![SolverType::GaussJordan],
            SolverArg::Lu => vec![SolverType::Lu],
            SolverArg::FastPathGaussJordan => vec![SolverType::FastPathGaussJordan],
            SolverArg::FastPathLu => vec![SolverType::FastPathLu],
            SolverArg::All => SolverType::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "linsolve-bench",
    about = "Time the dense linear solvers on a synthetic system"
)]
struct Cli {
    /// Number of unknowns in the generated system
    #[arg(short = 'n', long, default_value_t = 500)]
    unknowns: usize,

    /// Make the first equation depend on a single unknown so the fast path succeeds
    #[arg(long)]
    happy_path: bool,

    /// Strategy to run
    #[arg(long, value_enum, default_value = "all")]
    solver: SolverArg,

    /// Seed for the system generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Digits of the deviation check: |deviation| < 10^-digits
    #[arg(long, default_value_t = 10)]
    check_digits: i32,

    /// JSON solver configuration; the strategy is still taken from --solver
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let base = match &cli.config {
        Some(path) => SolverConfig::from_json_file(path)?,
        None => SolverConfig::default(),
    };

    let system = generate(cli.unknowns, cli.happy_path, cli.seed);
    println!(
        "System: {} unknowns, happy path: {}, seed: {}, parallel verification: {}",
        system.len(),
        cli.happy_path,
        cli.seed,
        is_parallel_available()
    );
    println!(
        "{:<24} {:>12} {:>14} {:>14} {:>8}",
        "strategy", "method", "time (ms)", "max |dev|", "ok"
    );

    for solver_type in cli.solver.solver_types() {
        let config = SolverConfig {
            solver_type,
            ..base.clone()
        };

        match solve(&system.augmented, &config) {
            Ok(solution) => {
                let devs = deviations(&system.augmented, &solution.values)?;
                let max_dev = devs.iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
                let ok = devs.iter().all(|&d| close_to_zero(d, cli.check_digits));
                println!(
                    "{:<24} {:>12} {:>14.3} {:>14.3e} {:>8}",
                    format!("{:?}", solver_type),
                    format!("{:?}", solution.method),
                    solution.elapsed.as_secs_f64() * 1000.0,
                    max_dev,
                    ok
                );
            }
            Err(e) => {
                log::warn!("{:?} failed: {}", solver_type, e);
                println!("{:<24} {:>12}", format!("{:?}", solver_type), "failed");
            }
        }
    }

    Ok(())
}
