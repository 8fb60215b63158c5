use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nanobanana")]
#[command(about = "🍌 Per-day task lists with tags, themes and a mini calendar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Override the directory holding the state files
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_without_arguments() {
        let cli = Cli::parse_from(["nanobanana"]);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_parses_data_dir_override() {
        let cli = Cli::parse_from(["nanobanana", "--data-dir", "/tmp/state"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/state")));
    }
}
