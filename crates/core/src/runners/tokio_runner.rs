//! Child process runner built on `tokio::process`

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{ChildStdin, Command};
use tracing::{debug, info, warn};

use super::traits::ProcessRunner;
use crate::{
    command::AnalyzerCommand,
    error::{Error, Result},
    types::ProcessOutcome,
};

/// Spawns real child processes.
///
/// All three standard streams are piped. stdout and stderr are drained
/// concurrently with each other, with the stdin writer and with the wait on the
/// child, so a child blocked on a full pipe can always make progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, command: &AnalyzerCommand) -> Result<ProcessOutcome> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(ref dir) = command.working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &command.env {
            cmd.env(key, value);
        }

        debug!("Spawning analyzer: {}", command.to_shell_command());
        let mut child = cmd.spawn().map_err(|source| Error::LaunchFailure {
            program: command.program.clone(),
            source,
        })?;

        let stdin = child.stdin.take();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let completion = async {
            tokio::try_join!(
                child.wait(),
                feed(stdin, command.stdin.as_deref()),
                drain(stdout),
                drain(stderr),
            )
        };

        let joined = match command.timeout {
            Some(limit) => {
                let waited = tokio::time::timeout(limit, completion).await;
                match waited {
                    Ok(joined) => joined,
                    Err(_) => {
                        warn!("Analyzer '{}' timed out after {:?}", command.program, limit);
                        if let Err(e) = child.kill().await {
                            warn!("Failed to kill timed-out analyzer '{}': {}", command.program, e);
                        }
                        return Err(Error::Timeout {
                            program: command.program.clone(),
                            after: limit,
                        });
                    }
                }
            }
            None => completion.await,
        };

        let (status, (), stdout, stderr) = joined?;
        let outcome = ProcessOutcome {
            exit_code: status.code().unwrap_or(-1),
            stdout,
            stderr,
        };

        info!(
            "Analyzer '{}' exited with {} (stdout={}B, stderr={}B)",
            command.program,
            outcome.exit_code,
            outcome.stdout.len(),
            outcome.stderr.len()
        );

        Ok(outcome)
    }

    fn name(&self) -> &'static str {
        "tokio"
    }
}

/// Write the payload (if any) and close stdin so the child sees EOF.
async fn feed(stdin: Option<ChildStdin>, payload: Option<&[u8]>) -> io::Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };

    if let Some(payload) = payload {
        match stdin.write_all(payload).await {
            Ok(()) => stdin.flush().await?,
            // The child may legitimately exit without reading its input
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("Analyzer closed stdin before reading {} bytes", payload.len());
            }
            Err(e) => return Err(e),
        }
    }

    drop(stdin);
    Ok(())
}

async fn drain<R: AsyncRead + Unpin>(stream: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}
