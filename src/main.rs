//! snapsheet - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use snapsheet::model::SiblingId;

/// Interactive snap-point sheet demo: drag to resize, toss to navigate
#[derive(Parser, Debug)]
#[command(name = "snapsheet")]
#[command(version)]
#[command(about = "Terminal demo of the snap-point sheet controller")]
pub struct Args {
    /// Record ids to page between with horizontal swipes
    #[arg(default_values_t = vec![
        "route-a".to_string(),
        "route-b".to_string(),
        "route-c".to_string(),
    ])]
    pub items: Vec<String>,

    /// Disable horizontal card swipes
    #[arg(long)]
    pub no_swipe: bool,

    /// Path to log file for tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = snapsheet::config::load_config_with_precedence(args.config.clone())?;
        let merged = snapsheet::config::merge_config(config_file);
        let with_env = snapsheet::config::apply_env_overrides(merged);

        // Only override swipe when the flag was explicitly set
        let swipe_override = if args.no_swipe { Some(false) } else { None };
        snapsheet::config::apply_cli_overrides(with_env, swipe_override, args.log_file.clone())
    };

    snapsheet::logging::init(&config.log_file_path)?;

    info!(
        config = ?config.sheet,
        "Configuration loaded and resolved"
    );

    let items: Vec<SiblingId> = args.items.iter().cloned().map(SiblingId::new).collect();
    snapsheet::view::run_demo(config, items)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["snapsheet", "--help"]);
        // Help returns Err with DisplayHelp, which is success
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["snapsheet", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["snapsheet"]);
        assert_eq!(args.items, vec!["route-a", "route-b", "route-c"]);
        assert!(!args.no_swipe);
        assert_eq!(args.log_file, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_custom_items() {
        let args = Args::parse_from(["snapsheet", "one", "two"]);
        assert_eq!(args.items, vec!["one", "two"]);
    }

    #[test]
    fn test_no_swipe_flag() {
        let args = Args::parse_from(["snapsheet", "--no-swipe"]);
        assert!(args.no_swipe);
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["snapsheet", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_log_file_path() {
        let args = Args::parse_from(["snapsheet", "--log-file", "/tmp/demo.log"]);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/demo.log")));
    }

    #[test]
    fn test_no_swipe_flows_through_config_precedence_chain() {
        use snapsheet::config::{apply_cli_overrides, apply_env_overrides, merge_config};

        let merged = merge_config(None);
        assert!(merged.sheet.swipe_enabled, "default has swipe on");

        let with_env = apply_env_overrides(merged);
        let with_cli = apply_cli_overrides(with_env, Some(false), None);
        assert!(
            !with_cli.sheet.swipe_enabled,
            "CLI flag should override all other sources"
        );
    }
}
