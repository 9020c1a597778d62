use crate::args::{DaemonAction, Invocation};

pub mod spawner;

pub use spawner::{ProcessSpawner, SpawnError, Spawner};

/// Names of the executables the launcher starts.
#[derive(Clone, Debug)]
pub struct Programs {
    pub cli: String,
    pub daemon: String,
    pub gui: String,
    /// Terminates processes by exact name, e.g. `pkill -x <name>`.
    pub terminate: String,
    pub terminate_args: Vec<String>,
}

impl Default for Programs {
    fn default() -> Self {
        Self {
            cli: "pwsp-cli".into(),
            daemon: "pwsp-daemon".into(),
            gui: "pwsp-gui".into(),
            terminate: "pkill".into(),
            terminate_args: vec!["-x".into()],
        }
    }
}

/// A single child process to start.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SpawnRequest {
    pub program: String,
    pub args: Vec<String>,
}

impl SpawnRequest {
    fn bare(program: &str) -> Self {
        Self {
            program: program.to_owned(),
            args: Vec::new(),
        }
    }
}

/// Decides which processes an [`Invocation`] starts.
pub fn plan(invocation: &Invocation, programs: &Programs) -> Vec<SpawnRequest> {
    match invocation {
        Invocation::None => vec![
            SpawnRequest::bare(&programs.daemon),
            SpawnRequest::bare(&programs.gui),
        ],
        Invocation::Cli(args) => vec![SpawnRequest {
            program: programs.cli.clone(),
            args: args.clone(),
        }],
        Invocation::Daemon(DaemonAction::Start) => vec![SpawnRequest::bare(&programs.daemon)],
        Invocation::Daemon(DaemonAction::Kill) => vec![SpawnRequest {
            program: programs.terminate.clone(),
            args: programs
                .terminate_args
                .iter()
                .cloned()
                .chain([programs.daemon.clone()])
                .collect(),
        }],
    }
}

/// Starts every process planned for `invocation`.
///
/// Stops at the first process that fails to spawn; anything started before it keeps running.
pub fn dispatch(
    invocation: &Invocation,
    programs: &Programs,
    spawner: &mut impl Spawner,
) -> Result<(), SpawnError> {
    for request in plan(invocation, programs) {
        log::debug!("Spawning {} {:?}", request.program, request.args);

        spawner.spawn(&request)?;
    }

    Ok(())
}
