use clap::Parser;
use std::path::PathBuf;
use vault_sweep::cli::Args;
use vault_sweep::config::types::LogLevel;

#[test]
fn all_flags_map_into_config() {
    let args = Args::parse_from([
        "vault_sweep",
        "--find-naked-urls",
        "/vault",
        "--filter",
        "github.com",
        "--move",
        "/vault/links",
        "--extension",
        ".txt",
        "--dry-run",
    ]);
    let cfg = args.to_config();
    assert_eq!(cfg.scan_dir, Some(PathBuf::from("/vault")));
    assert_eq!(cfg.filter.as_deref(), Some("github.com"));
    assert_eq!(cfg.move_target, Some(PathBuf::from("/vault/links")));
    assert_eq!(cfg.extension, "txt");
    assert!(cfg.dry_run);
}

#[test]
fn defaults_do_nothing_and_scan_markdown() {
    let cfg = Args::parse_from(["vault_sweep"]).to_config();
    assert!(cfg.scan_dir.is_none());
    assert!(cfg.filter.is_none());
    assert!(cfg.move_target.is_none());
    assert_eq!(cfg.extension, "md");
    assert_eq!(cfg.log_level, LogLevel::Normal);
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["vault_sweep", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));

    let args = Args::parse_from(["vault_sweep", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["vault_sweep", "--log-level", "loud"]);
    assert_eq!(args.effective_log_level(), None);
    assert_eq!(args.to_config().log_level, LogLevel::Normal);
}

#[test]
fn filter_without_value_is_rejected() {
    assert!(Args::try_parse_from(["vault_sweep", "--filter"]).is_err());
}

#[test]
fn empty_or_bare_dot_extension_falls_back_to_default() {
    for ext in ["", ".", "  "] {
        let cfg = Args::parse_from(["vault_sweep", "--extension", ext]).to_config();
        assert_eq!(cfg.extension, vault_sweep::Config::default().extension, "extension {ext:?}");
    }
}
