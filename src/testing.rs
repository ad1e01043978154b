//! In-process fakes shared by unit tests.

use crate::core::policy::{ExecutionPolicy, PolicyFlags};
use crate::runner::{CommandResult, CommandRunner, Confirmer, Spawner};
use crate::error::Result;
use crate::ui::{Choice, Level, OutputSink};
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Records everything that would have been printed.
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<(Level, String)>>,
    commands: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    pub fn has_message(&self, level: Level, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl OutputSink for MemorySink {
    fn message(&self, level: Level, msg: &str) {
        self.messages.lock().unwrap().push((level, msg.to_string()));
    }

    fn command(&self, line: &str) {
        self.commands.lock().unwrap().push(line.to_string());
    }
}

/// Scripted processes: binaries "on PATH" and canned responses keyed by the
/// full command line. Unscripted commands succeed with empty output.
#[derive(Default)]
pub struct FakeSpawner {
    binaries: Mutex<HashSet<String>>,
    responses: Mutex<HashMap<String, (i32, String, String)>>,
    calls: Mutex<Vec<String>>,
    lookups: Mutex<Vec<String>>,
}

impl FakeSpawner {
    pub fn with_binaries(binaries: &[&str]) -> Self {
        let spawner = Self::default();
        for bin in binaries {
            spawner.add_binary(bin);
        }
        spawner
    }

    pub fn add_binary(&self, binary: &str) {
        self.binaries.lock().unwrap().insert(binary.to_string());
    }

    pub fn respond(&self, line: &str, code: i32, stdout: &str, stderr: &str) {
        self.responses.lock().unwrap().insert(
            line.to_string(),
            (code, stdout.to_string(), stderr.to_string()),
        );
    }

    /// Command lines actually spawned, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Binaries looked up on PATH, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

impl Spawner for FakeSpawner {
    fn spawn(&self, argv: &[String], capture: bool) -> Result<CommandResult> {
        let line = argv.join(" ");
        self.calls.lock().unwrap().push(line.clone());

        let (code, stdout, stderr) = self
            .responses
            .lock()
            .unwrap()
            .get(&line)
            .cloned()
            .unwrap_or_default();

        Ok(CommandResult {
            argv: argv.to_vec(),
            exit_code: code,
            stdout: capture.then_some(stdout),
            stderr: capture.then_some(stderr),
            simulated: false,
        })
    }

    fn which(&self, binary: &str) -> Option<PathBuf> {
        self.lookups.lock().unwrap().push(binary.to_string());
        self.binaries
            .lock()
            .unwrap()
            .contains(binary)
            .then(|| PathBuf::from(format!("/usr/bin/{}", binary)))
    }
}

/// Returns scripted answers; panics when asked more often than scripted.
#[derive(Default)]
pub struct FakeConfirmer {
    answers: Mutex<VecDeque<Choice>>,
    questions: Mutex<Vec<String>>,
    /// Marked interrupted while the prompt is open, like Ctrl-C at a tty
    interrupts: Mutex<Option<Arc<ExecutionPolicy>>>,
}

impl FakeConfirmer {
    pub fn answering(answers: &[Choice]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            questions: Mutex::default(),
            interrupts: Mutex::default(),
        }
    }

    pub fn interrupt_while_asking(&self, policy: Arc<ExecutionPolicy>) {
        *self.interrupts.lock().unwrap() = Some(policy);
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Confirmer for FakeConfirmer {
    fn confirm(&self, question: &str) -> Choice {
        self.questions.lock().unwrap().push(question.to_string());
        if let Some(policy) = self.interrupts.lock().unwrap().as_ref() {
            policy.mark_interrupted();
        }
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected sudo prompt")
    }
}

/// Everything a test needs to drive a runner and inspect what happened.
pub struct Harness {
    pub runner: CommandRunner,
    pub spawner: Arc<FakeSpawner>,
    pub confirmer: Arc<FakeConfirmer>,
    pub sink: Arc<MemorySink>,
}

impl Harness {
    pub fn new(flags: PolicyFlags, spawner: FakeSpawner, answers: &[Choice]) -> Self {
        let sink = Arc::new(MemorySink::default());
        let spawner = Arc::new(spawner);
        let confirmer = Arc::new(FakeConfirmer::answering(answers));
        let policy = ExecutionPolicy::with_sink(flags, sink.clone()).shared();
        let runner = CommandRunner::with_parts(policy, spawner.clone(), confirmer.clone());

        Self {
            runner,
            spawner,
            confirmer,
            sink,
        }
    }

    pub fn live(spawner: FakeSpawner) -> Self {
        Self::new(PolicyFlags::default(), spawner, &[])
    }

    pub fn dry_run(spawner: FakeSpawner) -> Self {
        Self::new(
            PolicyFlags {
                dry_run: true,
                ..Default::default()
            },
            spawner,
            &[],
        )
    }
}
