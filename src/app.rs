//! Application orchestrator.
//! Initializes logging, builds the working set, prints it, and relocates it when asked.

use anyhow::Result;
use tracing::{debug, info};

use vault_sweep::cli::Args;
use vault_sweep::output as out;
use vault_sweep::{relocate_files, working_set, VaultSweepError};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let cfg = args.to_config();
    init_tracing(&cfg.log_level, args.json)?;
    debug!("Starting vault_sweep: {:?}", args);

    let Some(root) = cfg.scan_dir.as_deref() else {
        debug!("no scan directory given; nothing to do");
        return Ok(());
    };

    let matches = working_set(root, &cfg.extension, cfg.filter.as_deref()).inspect_err(log_fatal)?;
    info!(root = %root.display(), matched = matches.len(), filter = ?cfg.filter, "scan complete");

    if matches.is_empty() {
        out::print_no_matches(root);
        return Ok(());
    }
    out::print_matches(&matches);

    if let Some(target) = cfg.move_target.as_deref() {
        let report = relocate_files(&matches, target, cfg.dry_run).inspect_err(|e| {
            if let Some(vs) = e.downcast_ref::<VaultSweepError>() {
                log_fatal(vs);
            } else {
                debug!(error = %e, "relocation aborted");
            }
        })?;
        out::print_move_report(&report, cfg.dry_run);
    }
    Ok(())
}

/// Structured record of an aborting error; main prints the user-facing line.
fn log_fatal(e: &VaultSweepError) {
    let fatal = e.is_fatal();
    match e {
        VaultSweepError::InvalidDirectory { path, reason } => {
            debug!(code = e.code(), kind = e.kind(), fatal, path = %path.display(), %reason, "cannot scan")
        }
        VaultSweepError::InvalidTarget(path) => {
            debug!(code = e.code(), kind = e.kind(), fatal, path = %path.display(), "cannot move")
        }
        _ => debug!(code = e.code(), kind = e.kind(), fatal, error = %e, "run aborted"),
    }
}
