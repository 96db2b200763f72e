use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::default_paths;

#[derive(Parser)]
#[command(version, about)]
/// Plots set-operation benchmark timings.
///
/// Each file holds one measurement per line; its name up to the first `.`
/// labels the algorithm. Without arguments, array.data, list.data and
/// list_simple.data are read from the current directory.
pub struct Cli {
    /// Benchmark files to read.
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn paths(&self) -> Vec<PathBuf> {
        if self.files.is_empty() {
            default_paths()
        } else {
            self.files.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reads_default_files() {
        let cli = Cli::parse_from(["setplot"]);
        assert_eq!(
            cli.paths(),
            [
                PathBuf::from("array.data"),
                PathBuf::from("list.data"),
                PathBuf::from("list_simple.data"),
            ]
        );
    }

    #[test]
    fn explicit_files_replace_defaults() {
        let cli = Cli::parse_from(["setplot", "a.data", "b.data"]);
        assert_eq!(cli.paths(), [PathBuf::from("a.data"), PathBuf::from("b.data")]);
    }
}
