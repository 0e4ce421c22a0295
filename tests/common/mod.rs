//! Shared capture helpers for `fn`-pointer handlers.

#![allow(dead_code)]

use serialcmd::Tokens;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Handlers are plain `fn` pointers, so they report through statics. Tests
/// touching them run one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

static EVENTS: OnceLock<Mutex<Vec<String>>> = OnceLock::new();

static OUTPUT: OnceLock<Mutex<String>> = OnceLock::new();

fn events() -> &'static Mutex<Vec<String>> {
    EVENTS.get_or_init(|| Mutex::new(Vec::new()))
}

fn output() -> &'static Mutex<String> {
    OUTPUT.get_or_init(|| Mutex::new(String::new()))
}

/// Serialize the calling test and start from empty captures.
pub fn isolate() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    events()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clear();
    output()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clear();
    guard
}

pub fn record(event: impl Into<String>) {
    events().lock().unwrap().push(event.into());
}

/// Drain and return everything recorded so far.
pub fn take_events() -> Vec<String> {
    std::mem::take(&mut *events().lock().unwrap())
}

pub fn output_fn(text: &str) {
    output().lock().unwrap().push_str(text);
}

pub fn take_output() -> String {
    std::mem::take(&mut *output().lock().unwrap())
}

pub fn led(_: &mut Tokens<'_>) {
    record("led");
}

pub fn go_first(_: &mut Tokens<'_>) {
    record("go first");
}

pub fn go_second(_: &mut Tokens<'_>) {
    record("go second");
}

/// Records the command, then three `next()` results.
pub fn set(args: &mut Tokens<'_>) {
    record("set");
    for _ in 0..3 {
        record(format!("{:?}", args.next()));
    }
}

pub fn unrecognized(command: &str, _: &mut Tokens<'_>) {
    record(format!("unrec {command}"));
}

pub fn unrecognized_with_args(command: &str, args: &mut Tokens<'_>) {
    let rest: Vec<&str> = args.collect();
    record(format!("fallback {command} {rest:?}"));
}
