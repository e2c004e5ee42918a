use std::collections::VecDeque;

/// The machine's view of the outside world
///
/// Implement this to intercept input and output, e.g. to feed values computed
/// on demand or to react to each output as it is produced.
///
/// Only [`Intcode::run_until_halt`](super::Intcode::run_until_halt) and
/// [`Intcode::run`](super::Intcode::run) call [`Io::write_output`].
/// [`Intcode::step`](super::Intcode::step), [`Intcode::resume`](super::Intcode::resume)
/// and [`Intcode::generate`](super::Intcode::generate) hand each output back to
/// the caller instead, so a stepping caller never sees it in the `Io`.
pub trait Io {
    /// Next input value, or `None` if there is nothing to read yet
    fn read_input(&mut self) -> Option<i64>;

    /// Receives outputs from `run_until_halt` only
    fn write_output(&mut self, value: i64);

    /// Drop buffered state; called by [`Intcode::reset`](super::Intcode::reset)
    fn reset(&mut self) {}

    /// Checked before every instruction; `true` halts the machine
    fn halt_requested(&self) -> bool {
        false
    }
}

/// FIFO input and an append-only output buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueIo {
    inputs: VecDeque<i64>,
    outputs: Vec<i64>,
}

impl QueueIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_input(&mut self, value: i64) {
        self.inputs.push_back(value);
    }

    /// Queue every byte of `text` as its character code
    pub fn add_ascii_input(&mut self, text: &str) {
        self.inputs.extend(text.bytes().map(i64::from));
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn outputs(&self) -> &[i64] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<i64> {
        std::mem::take(&mut self.outputs)
    }
}

impl Extend<i64> for QueueIo {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        self.inputs.extend(iter);
    }
}

impl Io for QueueIo {
    fn read_input(&mut self) -> Option<i64> {
        self.inputs.pop_front()
    }

    fn write_output(&mut self, value: i64) {
        self.outputs.push(value);
    }

    fn reset(&mut self) {
        self.inputs.clear();
        self.outputs.clear();
    }
}
