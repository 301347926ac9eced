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

//! Run configuration derived from the command line

use crate::cli::{Cli, Commands};

/// Which problems a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Only print the registry.
    List,
    /// Solve every registered problem.
    All,
    /// Solve the given ids, in the given order.
    Ids(Vec<u32>),
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Problems to run
    pub selection: Selection,
}

impl Config {
    /// Get the log filter directive based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let selection = match cli.command {
            Commands::List => Selection::List,
            Commands::Solve { all: true, .. } => Selection::All,
            Commands::Solve { ids, .. } => Selection::Ids(ids),
        };
        Self {
            verbose: cli.verbose,
            selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_from_cli() {
        let config = Config::from(Cli::parse_from(["euler", "solve", "--all"]));
        assert_eq!(config.selection, Selection::All);
        assert_eq!(config.log_level(), "warn");

        let config = Config::from(Cli::parse_from(["euler", "-vvvv", "solve", "5", "2"]));
        assert_eq!(config.selection, Selection::Ids(vec![5, 2]));
        assert_eq!(config.log_level(), "trace");
    }
}
