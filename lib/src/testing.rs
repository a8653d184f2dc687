//! Test doubles and child-process helpers for the unit tests.

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::process::{Command, Output};
use std::vec::Vec;

use slopcrt_abi::{ExitStatus, Fd};

use crate::platform::Platform;

/// Platform that records every request instead of issuing syscalls.
///
/// Write results can be scripted with [`Recorder::with_responses`]: a
/// non-negative entry accepts at most that many bytes, a negative one is
/// returned as-is. Once the script runs out every write is accepted whole.
pub struct Recorder {
    writes: RefCell<Vec<(Fd, Vec<u8>)>>,
    responses: RefCell<VecDeque<isize>>,
    requests: Cell<usize>,
    exits: RefCell<Vec<ExitStatus>>,
    exit_limit: Option<usize>,
    trapped: Cell<bool>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            writes: RefCell::new(Vec::new()),
            responses: RefCell::new(VecDeque::new()),
            requests: Cell::new(0),
            exits: RefCell::new(Vec::new()),
            exit_limit: None,
            trapped: Cell::new(false),
        }
    }

    pub fn with_responses(self, responses: &[isize]) -> Self {
        self.responses.borrow_mut().extend(responses.iter().copied());
        self
    }

    /// Panic on the `n`th refused exit request, to break retry loops.
    pub fn give_up_exit_after(mut self, n: usize) -> Self {
        self.exit_limit = Some(n);
        self
    }

    /// Concatenation of every accepted byte written to `fd`.
    pub fn bytes_for(&self, fd: Fd) -> Vec<u8> {
        self.writes
            .borrow()
            .iter()
            .filter(|(target, _)| *target == fd)
            .flat_map(|(_, bytes)| bytes.iter().copied())
            .collect()
    }

    /// Individual accepted writes, in order.
    pub fn writes(&self) -> Vec<(Fd, Vec<u8>)> {
        self.writes.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    pub fn exit_requests(&self) -> Vec<ExitStatus> {
        self.exits.borrow().clone()
    }

    pub fn trapped(&self) -> bool {
        self.trapped.get()
    }
}

impl Platform for Recorder {
    unsafe fn write(&self, fd: Fd, buf: *const u8, len: usize) -> isize {
        self.requests.set(self.requests.get() + 1);
        let bytes = unsafe { core::slice::from_raw_parts(buf, len) };
        let accepted = match self.responses.borrow_mut().pop_front() {
            Some(ret) if ret < 0 => return ret,
            Some(limit) => (limit as usize).min(len),
            None => len,
        };
        self.writes.borrow_mut().push((fd, bytes[..accepted].to_vec()));
        accepted as isize
    }

    fn request_exit(&self, status: ExitStatus) {
        let attempts = {
            let mut exits = self.exits.borrow_mut();
            exits.push(status);
            exits.len()
        };
        if self.exit_limit.is_some_and(|limit| attempts >= limit) {
            panic!("exit refused {} times", attempts);
        }
    }

    fn trap(&self) -> ! {
        self.trapped.set(true);
        panic!("trap");
    }
}

const CHILD_ENV: &str = "SLOPCRT_TEST_CHILD";

/// True inside a process started by [`spawn_child`].
pub fn run_in_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

/// Re-run this test binary with only the ignored test `name` selected.
///
/// Used for code paths that end the process: the child runs them, the
/// parent inspects its status and output.
pub fn spawn_child(name: &str) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([name, "--exact", "--ignored", "--test-threads=1", "--nocapture"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("spawn child test process")
}
