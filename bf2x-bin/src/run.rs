use std::{
    io,
    path::Path,
    process::{Command, ExitStatus},
};

use bf2x::codegen::Target;
use tracing::{error, info, warn};

#[derive(Debug)]
pub enum RunOutcome {
    /// The target has no run command.
    NotRunnable,
    Succeeded,
    /// The program ran and exited unsuccessfully. The generated file stays.
    Failed(ExitStatus),
    /// The command couldn't be spawned, e.g. the runtime isn't installed.
    Unavailable(io::Error),
}

/// Runs the generated file at `path` with the target's run command, if any.
///
/// Nothing here is fatal: every outcome is logged and returned.
pub fn try_run(target: Target, path: &Path) -> RunOutcome {
    let descriptor = target.descriptor();
    let Some(argv) = descriptor.run_command(&path.to_string_lossy()) else {
        return RunOutcome::NotRunnable;
    };

    info!(%target, command = ?argv, "running");
    println!("[run] -------- output --------");
    let outcome = run_argv(&argv);
    match &outcome {
        RunOutcome::NotRunnable | RunOutcome::Succeeded => (),
        RunOutcome::Failed(status) => error!("{} program exited with {status}", descriptor.name),
        RunOutcome::Unavailable(e) => warn!("can't auto-run {}: {e}", descriptor.name),
    }
    outcome
}

fn run_argv(argv: &[String]) -> RunOutcome {
    let Some((program, args)) = argv.split_first() else {
        return RunOutcome::NotRunnable;
    };
    match Command::new(program).args(args).status() {
        Ok(status) if status.success() => RunOutcome::Succeeded,
        Ok(status) => RunOutcome::Failed(status),
        Err(e) => RunOutcome::Unavailable(e),
    }
}
