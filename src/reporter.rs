//! Where assertion failures go.

/// The test-reporting collaborator used by every assertion.
pub trait Reporter {
    /// Record a block of report text.
    fn log(&mut self, text: &str);

    /// Mark the current test as failed and keep going.
    fn fail(&mut self);

    /// Mark the current test as failed and stop it.
    fn fail_now(&mut self);
}

/// Reporter for `#[test]` functions under the standard harness.
///
/// Failures are collected while the test keeps running. `fail_now` panics
/// straight away; otherwise the reporter panics with every collected report
/// when it is dropped.
#[derive(Debug, Default)]
pub struct TestReporter {
    logs: Vec<String>,
    failed: bool,
}

impl TestReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    fn summary(&self) -> String {
        self.logs.concat()
    }
}

impl Reporter for TestReporter {
    fn log(&mut self, text: &str) {
        self.logs.push(text.to_string());
    }

    fn fail(&mut self) {
        self.failed = true;
    }

    fn fail_now(&mut self) {
        self.failed = true;
        panic!("assertion failed:{}", self.summary());
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if self.failed && !std::thread::panicking() {
            panic!("assertion failed:{}", self.summary());
        }
    }
}

/// Reporter that only records what happened; used to test assertion helpers.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    logs: String,
    failures: usize,
    halted: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything logged so far, concatenated.
    pub fn logs(&self) -> &str {
        &self.logs
    }

    pub fn failed(&self) -> bool {
        self.failures > 0
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Whether `fail_now` was called.
    pub fn halted(&self) -> bool {
        self.halted
    }
}

impl Reporter for Recorder {
    fn log(&mut self, text: &str) {
        self.logs.push_str(text);
    }

    fn fail(&mut self) {
        self.failures += 1;
    }

    fn fail_now(&mut self) {
        self.halted = true;
    }
}
