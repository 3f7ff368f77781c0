// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   webcrawl https://example.com
//   webcrawl https://example.com --output-file visited.txt
//
// Without --output-file, visited URLs are printed to stdout. With it, they are
// appended to the file (which is created if it doesn't exist).
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webcrawl",
    version,
    about = "Crawl a website breadth-first and list every page visited",
    long_about = "webcrawl starts from a URL, follows every link it finds and prints each \
                  page it visits successfully, one per line. Pages are fetched one at a time \
                  with a one second pause between requests."
)]
pub struct Cli {
    /// Starting URL (e.g., https://example.com)
    pub url: String,

    /// Append visited URLs to this file instead of printing them
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_only() {
        let cli = Cli::try_parse_from(["webcrawl", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert!(cli.output_file.is_none());
    }

    #[test]
    fn test_parse_output_file() {
        let cli = Cli::try_parse_from([
            "webcrawl",
            "https://example.com",
            "--output-file",
            "visited.txt",
        ])
        .unwrap();
        assert_eq!(cli.output_file, Some(PathBuf::from("visited.txt")));
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["webcrawl"]).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["webcrawl", "https://example.com", "--max-depth", "2"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
