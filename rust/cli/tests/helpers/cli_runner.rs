use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Env vars the CLI reads; cleared for every spawned process unless a test sets them.
const CONFIG_VARS: &[&str] = &["HEADSUP_CONFIG", "HEADSUP_SEED", "HEADSUP_STACK", "RUST_LOG"];

#[derive(Debug)]
pub struct CliRunner {
    binary_path: PathBuf,
    temp_dir: TempDir,
}

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

#[allow(dead_code)]
impl CliRunner {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_headsup")),
            temp_dir: TempDir::new()?,
        })
    }

    /// Scratch directory the binary runs in.
    pub fn workdir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    pub fn run_with_env_and_input(
        &self,
        args: &[&str],
        env: &[(&str, &str)],
        input: &str,
    ) -> CliResult {
        self.run_inner(args, env, Some(input))
    }

    /// Calls `headsup_cli::run_with_input` in-process instead of spawning.
    pub fn run_in_process(&self, args: &[&str], input: &str) -> CliResult {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = std::io::Cursor::new(input.as_bytes().to_vec());
        let argv = std::iter::once("headsup").chain(args.iter().copied());
        let start = Instant::now();
        let code = headsup_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
            duration: start.elapsed(),
        }
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(&self.binary_path);
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for key in CONFIG_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let start = Instant::now();
        let mut child = cmd.spawn().expect("failed to spawn CLI binary");

        if let Some(payload) = input
            && let Some(mut stdin) = child.stdin.take()
        {
            let _ = stdin.write_all(payload.as_bytes());
        }

        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CliRunner;

    #[test]
    fn run_with_input_accepts_empty_payload() {
        let cli = CliRunner::new().expect("CliRunner init");
        let result = cli.run_with_input(&["--help"], "");

        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("Usage"));
    }

    #[test]
    fn run_in_process_matches_binary_for_help() {
        let cli = CliRunner::new().expect("CliRunner init");
        let spawned = cli.run(&["--help"]);
        let local = cli.run_in_process(&["--help"], "");

        assert_eq!(spawned.exit_code, local.exit_code);
        assert!(local.stdout.contains("Usage"));
    }
}
