use std::process::ExitCode;

use vault_sweep::output as out;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = vault_sweep::cli::parse();
    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
