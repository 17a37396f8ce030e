//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "employee-tui",
    about = "Browse, create and edit employee records in the terminal",
    version
)]
pub struct Cli {
    /// Starting route: `/`, `/create` or `/edit/<id>`
    #[arg(default_value = "/")]
    pub route: String,

    /// Base address of the employee store
    #[arg(long)]
    pub store: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["employee-tui"]);
        assert_eq!(cli.route, "/");
        assert!(cli.store.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_route_and_flags() {
        let cli = Cli::parse_from([
            "employee-tui",
            "/edit/3",
            "--store",
            "http://store:8080",
            "--config",
            "/tmp/c.json",
        ]);
        assert_eq!(cli.route, "/edit/3");
        assert_eq!(cli.store.as_deref(), Some("http://store:8080"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.json")));
    }
}
