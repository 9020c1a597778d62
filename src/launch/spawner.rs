use std::process::Command;

use super::SpawnRequest;

/// The operating system could not create a requested child process.
#[derive(thiserror::Error, Debug)]
#[error("Unable to spawn `{program}`: {source}")]
pub struct SpawnError {
    program: String,
    #[source]
    source: std::io::Error,
}

impl SpawnError {
    pub fn new(program: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            program: program.into(),
            source,
        }
    }
}

/// Creates child processes for [`SpawnRequest`]s.
pub trait Spawner {
    /// Starts the requested process without waiting on it.
    fn spawn(&mut self, request: &SpawnRequest) -> Result<(), SpawnError>;
}

/// Spawns real, detached processes resolved through `PATH`.
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&mut self, request: &SpawnRequest) -> Result<(), SpawnError> {
        let child = Command::new(&request.program)
            .args(&request.args)
            .spawn()
            .map_err(|e| SpawnError::new(&request.program, e))?;

        log::debug!("Spawned {} with pid {}", request.program, child.id());

        // Dropping the handle leaves the child running.
        drop(child);
        Ok(())
    }
}
