//! Delivery of rendered messages to receivers and to the console.
//!
//! Platform adapters implement [`MessageSink`] for their receivers (players,
//! entities, connections) and [`ConsoleLog`] for their log stream. Closures
//! implement both traits, so small adapters need no named type.

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use tracing::{debug, error, info, trace, warn};

use crate::runtime::error::SinkError;
use crate::types::ConsoleLogLevel;

/// Delivers a rendered message to an addressed receiver.
pub trait MessageSink<M, R> {
    fn send(&mut self, receiver: &R, message: M) -> Result<(), SinkError>;
}

impl<M, R, F> MessageSink<M, R> for F
where
    F: FnMut(&R, M) -> Result<(), SinkError>,
{
    fn send(&mut self, receiver: &R, message: M) -> Result<(), SinkError> {
        self(receiver, message)
    }
}

/// Writes a rendered console message at a severity level.
pub trait ConsoleLog<M> {
    fn log(&mut self, level: ConsoleLogLevel, message: M);
}

impl<M, F> ConsoleLog<M> for F
where
    F: FnMut(ConsoleLogLevel, M),
{
    fn log(&mut self, level: ConsoleLogLevel, message: M) {
        self(level, message);
    }
}

/// Prints console messages to standard output as `[LEVEL]: message`.
///
/// This is the console used when none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl<M: Display> ConsoleLog<M> for StdoutConsole {
    fn log(&mut self, level: ConsoleLogLevel, message: M) {
        println!("[{level}]: {message}");
    }
}

/// Emits console messages as `tracing` events at the matching level.
///
/// Events use the `lexicon::console` target, so subscribers can filter them
/// separately from other diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl<M: Display> ConsoleLog<M> for TracingConsole {
    fn log(&mut self, level: ConsoleLogLevel, message: M) {
        match level {
            ConsoleLogLevel::Error => error!(target: "lexicon::console", "{message}"),
            ConsoleLogLevel::Warn => warn!(target: "lexicon::console", "{message}"),
            ConsoleLogLevel::Info => info!(target: "lexicon::console", "{message}"),
            ConsoleLogLevel::Debug => debug!(target: "lexicon::console", "{message}"),
            ConsoleLogLevel::Trace => trace!(target: "lexicon::console", "{message}"),
        }
    }
}

/// Records every delivered message in memory.
///
/// Clones share the same record, so a clone can be handed to a
/// [`Localization`](crate::Localization) and the original inspected later.
#[derive(Debug)]
pub struct MemorySink<M, R> {
    delivered: Rc<RefCell<Vec<(R, M)>>>,
}

impl<M, R> Default for MemorySink<M, R> {
    fn default() -> Self {
        Self {
            delivered: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<M, R> Clone for MemorySink<M, R> {
    fn clone(&self) -> Self {
        Self {
            delivered: Rc::clone(&self.delivered),
        }
    }
}

impl<M, R> MemorySink<M, R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything delivered so far.
    pub fn take(&self) -> Vec<(R, M)> {
        self.delivered.take()
    }

    pub fn len(&self) -> usize {
        self.delivered.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.delivered.borrow().is_empty()
    }
}

impl<M, R: Clone> MessageSink<M, R> for MemorySink<M, R> {
    fn send(&mut self, receiver: &R, message: M) -> Result<(), SinkError> {
        self.delivered.borrow_mut().push((receiver.clone(), message));
        Ok(())
    }
}

/// Records every console message in memory.
#[derive(Debug)]
pub struct MemoryConsole<M> {
    logged: Rc<RefCell<Vec<(ConsoleLogLevel, M)>>>,
}

impl<M> Default for MemoryConsole<M> {
    fn default() -> Self {
        Self {
            logged: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<M> Clone for MemoryConsole<M> {
    fn clone(&self) -> Self {
        Self {
            logged: Rc::clone(&self.logged),
        }
    }
}

impl<M> MemoryConsole<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything logged so far.
    pub fn take(&self) -> Vec<(ConsoleLogLevel, M)> {
        self.logged.take()
    }

    pub fn len(&self) -> usize {
        self.logged.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.logged.borrow().is_empty()
    }
}

impl<M> ConsoleLog<M> for MemoryConsole<M> {
    fn log(&mut self, level: ConsoleLogLevel, message: M) {
        self.logged.borrow_mut().push((level, message));
    }
}
