// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock image backend for deterministic testing.
//!
//! `MockBackend` implements `ImageBackend` for a configurable capability set
//! and answers every call with a value tagged by its own name, so tests can
//! see exactly which backend the dispatcher picked.

use std::sync::{Arc, Mutex};

use pictor_core::{CallArgs, Capability, ImageBackend, PictorError, Value};

/// A single invocation captured by a [`MockBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub capability: Capability,
    pub args: CallArgs,
}

/// A backend that records calls and returns `"<name>:<capability>"`.
///
/// Clones share the same call log, so a test can keep one handle while the
/// registry owns another.
#[derive(Clone)]
pub struct MockBackend {
    name: String,
    supported: Vec<Capability>,
    failing: Option<Capability>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockBackend {
    /// Create a mock backend supporting `supported`.
    pub fn new(name: &str, supported: &[Capability]) -> Self {
        Self {
            name: name.to_string(),
            supported: supported.to_vec(),
            failing: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every call to `capability` fail with a backend error.
    pub fn failing_on(mut self, capability: Capability) -> Self {
        self.failing = Some(capability);
        self
    }

    /// The value this backend returns for `capability`.
    pub fn expected_value(&self, capability: Capability) -> Value {
        Value::Str(format!("{}:{}", self.name, capability))
    }

    /// Snapshot of all recorded calls, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    /// Share this backend as a trait object.
    pub fn into_backend(self) -> Arc<dyn ImageBackend> {
        Arc::new(self)
    }
}

impl ImageBackend for MockBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn supports(&self, capability: Capability) -> bool {
        self.supported.contains(&capability)
    }

    fn invoke(&self, capability: Capability, args: CallArgs) -> Result<Value, PictorError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall { capability, args });

        if self.failing == Some(capability) {
            return Err(PictorError::Backend {
                message: format!("{} failed on {capability}", self.name),
                source: None,
            });
        }

        Ok(self.expected_value(capability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_across_clones() {
        let mock = MockBackend::new("alpha", &[Capability::Read]);
        let handle = mock.clone();
        let backend = mock.into_backend();

        let value = backend
            .invoke(Capability::Read, CallArgs::new().arg("a.png"))
            .unwrap();
        assert_eq!(value, Value::Str("alpha:read".into()));

        let calls = handle.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].capability, Capability::Read);
        assert_eq!(calls[0].args.positional, vec![Value::from("a.png")]);
    }

    #[test]
    fn failing_capability_returns_backend_error() {
        let mock = MockBackend::new("alpha", &[Capability::Save]).failing_on(Capability::Save);
        let err = mock.invoke(Capability::Save, CallArgs::new()).unwrap_err();
        assert!(matches!(err, PictorError::Backend { .. }));
    }
}
