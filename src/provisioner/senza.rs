// ABOUTME: Provisioner backed by the senza command-line tool.
// ABOUTME: Builds region-scoped senza invocations and maps exit status to typed errors.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::error::{DomainsError, ExecutionError, TrafficError};
use super::traits::Provisioner;
use crate::types::{ImageSpec, Percentage, Region, StackName, StackVersion};

/// Binary looked up on `PATH` when none is configured.
pub const DEFAULT_BINARY: &str = "senza";

/// Runs senza commands against one region.
#[derive(Debug, Clone)]
pub struct SenzaCli {
    binary: PathBuf,
    region: Region,
}

/// One row of `senza domains -o json`. Other columns are ignored.
#[derive(Debug, Deserialize)]
struct DomainRecord {
    domain: String,
}

impl SenzaCli {
    pub fn new(region: Region) -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_BINARY),
            region,
        }
    }

    pub fn binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Build `<binary> <subcommand> <args...> --region <region> [-o json]`.
    fn command(&self, subcommand: &str, args: &[&str], json: bool) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(subcommand)
            .args(args)
            .arg("--region")
            .arg(self.region.as_str());
        if json {
            cmd.args(["-o", "json"]);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// Run a senza subcommand and return its stdout.
    fn execute(
        &self,
        subcommand: &str,
        args: &[&str],
        json: bool,
    ) -> Result<String, ExecutionError> {
        let mut cmd = self.command(subcommand, args, json);
        tracing::debug!(command = ?cmd, "running senza");

        let output = cmd.output().map_err(|e| {
            ExecutionError::new(
                None,
                format!("failed to run {}: {}", self.binary.display(), e),
            )
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = [stderr.trim(), stdout.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        // A silent failure still needs a message for the caller.
        let message = match (message.is_empty(), output.status.code()) {
            (false, _) => message,
            (true, Some(code)) => format!("senza {subcommand} exited with code {code}"),
            (true, None) => format!("senza {subcommand} was terminated by a signal"),
        };

        tracing::debug!(
            exit_code = ?output.status.code(),
            %message,
            "senza {} failed",
            subcommand
        );

        Err(ExecutionError::new(output.status.code(), message))
    }
}

impl Provisioner for SenzaCli {
    fn domains(&self, stack_name: &StackName) -> Result<Vec<String>, DomainsError> {
        let stdout = self.execute("domains", &[stack_name.as_str()], true)?;
        parse_domains(&stdout)
    }

    fn traffic(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
        percentage: Percentage,
    ) -> Result<(), TrafficError> {
        let percentage = percentage.to_string();
        self.execute(
            "traffic",
            &[stack_name.as_str(), stack_version.as_str(), &percentage],
            false,
        )?;
        Ok(())
    }

    fn patch(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
        image: &ImageSpec,
    ) -> Result<(), ExecutionError> {
        self.execute(
            "patch",
            &[
                stack_name.as_str(),
                stack_version.as_str(),
                "--image",
                image.as_str(),
            ],
            false,
        )?;
        Ok(())
    }

    fn respawn_instances(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
    ) -> Result<(), ExecutionError> {
        self.execute(
            "respawn-instances",
            &[stack_name.as_str(), stack_version.as_str()],
            false,
        )?;
        Ok(())
    }
}

/// Extract domain names from `senza domains -o json` output.
/// Blank output is treated as an empty listing.
fn parse_domains(stdout: &str) -> Result<Vec<String>, DomainsError> {
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<DomainRecord> = serde_json::from_str(stdout)?;
    Ok(records.into_iter().map(|r| r.domain).collect())
}
