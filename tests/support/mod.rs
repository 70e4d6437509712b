// ABOUTME: Test support utilities.
// ABOUTME: Provides a recording provisioner double, log capture, and fake senza scripts.

// Each test binary only uses some of these helpers, so allow dead_code.
#![allow(dead_code)]

use parking_lot::Mutex;
use stackshift::provisioner::{DomainsError, ExecutionError, Provisioner, TrafficError};
use stackshift::stack::Stack;
use stackshift::types::{ImageSpec, Percentage, StackId, StackName, StackVersion};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

/// Build a stack with a fixed identifier.
pub fn stack(id: &str, name: &str, version: &str, traffic: u32) -> Stack {
    Stack::new(
        StackId::new(id),
        StackName::new(name).unwrap(),
        StackVersion::new(version).unwrap(),
        Percentage::new(traffic).unwrap(),
    )
}

// =============================================================================
// Provisioner double
// =============================================================================

/// A provisioner command as the double received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Domains {
        stack_name: String,
    },
    Traffic {
        stack_name: String,
        stack_version: String,
        percentage: u8,
    },
    Patch {
        stack_name: String,
        stack_version: String,
        image: String,
    },
    Respawn {
        stack_name: String,
        stack_version: String,
    },
}

/// Provisioner that records every call and fails on request.
#[derive(Debug, Default)]
pub struct FakeProvisioner {
    domains: Vec<String>,
    domains_failure: Option<String>,
    traffic_failure: Option<String>,
    patch_failure: Option<String>,
    respawn_failure: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeProvisioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(mut self, domains: &[&str]) -> Self {
        self.domains = domains.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn failing_domains(mut self, message: &str) -> Self {
        self.domains_failure = Some(message.to_string());
        self
    }

    pub fn failing_traffic(mut self, message: &str) -> Self {
        self.traffic_failure = Some(message.to_string());
        self
    }

    pub fn failing_patch(mut self, message: &str) -> Self {
        self.patch_failure = Some(message.to_string());
        self
    }

    pub fn failing_respawn(mut self, message: &str) -> Self {
        self.respawn_failure = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn traffic_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Traffic { .. }))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn failure(message: &Option<String>) -> Result<(), ExecutionError> {
        match message {
            Some(m) => Err(ExecutionError::new(Some(1), m.clone())),
            None => Ok(()),
        }
    }
}

impl Provisioner for FakeProvisioner {
    fn domains(&self, stack_name: &StackName) -> Result<Vec<String>, DomainsError> {
        self.record(Call::Domains {
            stack_name: stack_name.to_string(),
        });
        Self::failure(&self.domains_failure)?;
        Ok(self.domains.clone())
    }

    fn traffic(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
        percentage: Percentage,
    ) -> Result<(), TrafficError> {
        self.record(Call::Traffic {
            stack_name: stack_name.to_string(),
            stack_version: stack_version.to_string(),
            percentage: percentage.value(),
        });
        Self::failure(&self.traffic_failure)?;
        Ok(())
    }

    fn patch(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
        image: &ImageSpec,
    ) -> Result<(), ExecutionError> {
        self.record(Call::Patch {
            stack_name: stack_name.to_string(),
            stack_version: stack_version.to_string(),
            image: image.to_string(),
        });
        Self::failure(&self.patch_failure)
    }

    fn respawn_instances(
        &self,
        stack_name: &StackName,
        stack_version: &StackVersion,
    ) -> Result<(), ExecutionError> {
        self.record(Call::Respawn {
            stack_name: stack_name.to_string(),
            stack_version: stack_version.to_string(),
        });
        Self::failure(&self.respawn_failure)
    }
}

// =============================================================================
// Log capture
// =============================================================================

/// A log record as seen by the capturing layer.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub fields: BTreeMap<String, String>,
}

impl LogRecord {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Clone, Default)]
struct LogCapture {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        self.records.lock().push(LogRecord {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct RecordVisitor {
    message: String,
    fields: BTreeMap<String, String>,
}

impl RecordVisitor {
    fn insert(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }
}

/// Run `f` with a subscriber capturing every record emitted on this thread.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<LogRecord>) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    let records = capture.records.lock().clone();
    (result, records)
}

/// Records at exactly `level`.
pub fn at_level(records: &[LogRecord], level: Level) -> Vec<&LogRecord> {
    records.iter().filter(|r| r.level == level).collect()
}

// =============================================================================
// Fake senza binary
// =============================================================================

/// Write an executable shell script standing in for senza.
///
/// Every invocation appends its arguments as one line to `calls.log` next to
/// the script before running `body`.
pub fn fake_senza(dir: &Path, body: &str) -> PathBuf {
    let script_path = dir.join("senza");
    let log_path = dir.join("calls.log");
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> '{}'\n{}\n",
        log_path.display(),
        body
    );
    fs::write(&script_path, script).unwrap();

    // Make executable
    let mut perms = fs::metadata(&script_path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script_path, perms).unwrap();

    script_path
}

/// Argument lines recorded by a fake senza, oldest first.
pub fn senza_calls(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("calls.log"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
