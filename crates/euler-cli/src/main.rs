// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use anyhow::{bail, Context};
use clap::Parser;
use euler_problems::{problem::Solution, registry};
use tracing::error;

mod cli;
mod config;
mod logging;

use cli::Cli;
use config::{Config, Selection};

fn main() {
    let config = Config::from(Cli::parse());
    logging::init_logging(&config);

    if let Err(e) = run(&config) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    match &config.selection {
        Selection::List => {
            for problem in registry::registry() {
                println!("{problem}");
            }
            Ok(())
        }
        Selection::All => {
            let solutions = registry::solve_all().context("Failed to solve the registry")?;
            for solution in &solutions {
                println!("{solution}");
            }
            check_answers(&solutions)
        }
        Selection::Ids(ids) => solve_each(ids),
    }
}

/// Solves the requested problems in order, printing each solution as soon as
/// it is computed. Unknown ids and failing solvers are reported on stderr
/// without stopping the remaining ids.
fn solve_each(ids: &[u32]) -> anyhow::Result<()> {
    let mut solutions = Vec::with_capacity(ids.len());
    let mut failed = Vec::new();
    for &id in ids {
        match registry::solve(id) {
            Ok(solution) => {
                println!("{solution}");
                solutions.push(solution);
            }
            Err(e) => {
                error!(id, "{e}");
                eprintln!("Error: {e}");
                failed.push(id.to_string());
            }
        }
    }

    if !failed.is_empty() {
        bail!("Could not solve problem(s) {}", failed.join(", "));
    }
    check_answers(&solutions)
}

fn check_answers(solutions: &[Solution]) -> anyhow::Result<()> {
    let wrong: Vec<String> = solutions
        .iter()
        .filter(|solution| !solution.is_correct())
        .map(|solution| solution.id().to_string())
        .collect();
    if !wrong.is_empty() {
        bail!("Wrong answer for problem(s) {}", wrong.join(", "));
    }
    Ok(())
}
