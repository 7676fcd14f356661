//! Infrastructure implementation of the `CommandRunner` port.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` backed by `tokio::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<Output> {
        tracing::debug!(program, ?args, "running command");

        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        // Read stdout/stderr concurrently with wait(): a child that fills a
        // pipe buffer blocks on write and wait() would never resolve.
        let (status, stdout, stderr) = tokio::join!(
            child.wait(),
            read_stream(stdout_handle.as_mut(), program, "stdout"),
            read_stream(stderr_handle.as_mut(), program, "stderr"),
        );

        Ok(Output {
            status: status.with_context(|| format!("waiting for {program}"))?,
            stdout,
            stderr,
        })
    }
}

/// Read `handle` to EOF. On a read error the bytes read so far are returned
/// and the error is logged.
async fn read_stream<H>(handle: Option<&mut H>, program: &str, stream: &str) -> Vec<u8>
where
    H: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let Some(h) = handle else {
        return buf;
    };
    if let Err(e) = h.read_to_end(&mut buf).await {
        tracing::warn!(program, stream, error = %e, read = buf.len(), "output read failed");
    }
    buf
}
