use super::{Io, IntcodeError, Program, QueueIo};
use std::collections::HashMap;
use std::str::FromStr;

/// Outcome of executing a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Output(i64),
    Halted,
}

/// Where [`Intcode::resume`] stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Output(i64),
    /// An input instruction found nothing to read; the instruction pointer
    /// still points at it
    NeedsInput,
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Position,
    Immediate,
    Relative,
}

/// An Intcode machine
///
/// Memory is the loaded [`Program`] overlaid with a sparse map of writes, so
/// reading an address nobody wrote yields the program word, or 0 past its end.
/// Cloning snapshots the full state; [`Intcode::fresh`] gives the same program
/// with nothing run.
#[derive(Debug, Clone)]
pub struct Intcode<I = QueueIo> {
    program: Program,
    memory: HashMap<usize, i64>,
    ip: usize,
    relative_base: i64,
    halted: bool,
    io: I,
}

impl Intcode<QueueIo> {
    pub fn new(program: Program) -> Self {
        Self::with_io(program, QueueIo::new())
    }

    pub fn add_input(&mut self, value: i64) {
        self.io.add_input(value);
    }

    pub fn add_ascii_input(&mut self, text: &str) {
        self.io.add_ascii_input(text);
    }

    /// Every output written since the last reset or take
    pub fn outputs(&self) -> &[i64] {
        self.io.outputs()
    }

    pub fn take_outputs(&mut self) -> Vec<i64> {
        self.io.take_outputs()
    }

    /// Queue `inputs`, run until halt and return the outputs of this run.
    ///
    /// Fails with [`IntcodeError::InputUnderflow`] if the program asks for
    /// more input than was queued.
    pub fn run(&mut self, inputs: impl IntoIterator<Item = i64>) -> Result<Vec<i64>, IntcodeError> {
        self.io.extend(inputs);
        let before = self.io.outputs().len();
        self.run_until_halt()?;
        Ok(self.io.outputs()[before..].to_vec())
    }
}

impl FromStr for Intcode<QueueIo> {
    type Err = IntcodeError;

    fn from_str(s: &str) -> Result<Self, IntcodeError> {
        s.parse().map(Self::new)
    }
}

impl<I: Io> Intcode<I> {
    pub fn with_io(program: Program, io: I) -> Self {
        Self {
            program,
            memory: HashMap::new(),
            ip: 0,
            relative_base: 0,
            halted: false,
            io,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn io(&self) -> &I {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }

    pub fn instruction_pointer(&self) -> usize {
        self.ip
    }

    pub fn relative_base(&self) -> i64 {
        self.relative_base
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Stop the machine; further steps report [`Step::Halted`]
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn peek(&self, addr: usize) -> i64 {
        self.memory
            .get(&addr)
            .or_else(|| self.program.get(addr))
            .copied()
            .unwrap_or(0)
    }

    pub fn poke(&mut self, addr: usize, value: i64) {
        self.memory.insert(addr, value);
    }

    /// Reload the program and clear registers, halt flag and I/O
    pub fn reset(&mut self) {
        self.memory.clear();
        self.ip = 0;
        self.relative_base = 0;
        self.halted = false;
        self.io.reset();
    }

    /// The same program on a machine that has not run
    pub fn fresh(&self) -> Self
    where
        I: Default,
    {
        Self::with_io(self.program.clone(), I::default())
    }

    /// Execute one instruction.
    ///
    /// Output values are returned, not written to the [`Io`]. A read with no
    /// input available fails with [`IntcodeError::InputUnderflow`] and leaves
    /// the machine untouched.
    pub fn step(&mut self) -> Result<Step, IntcodeError> {
        if self.halted || self.io.halt_requested() {
            self.halted = true;
            return Ok(Step::Halted);
        }

        let ip = self.ip;
        let word = self.peek(ip);
        match word % 100 {
            op @ (1 | 2 | 7 | 8) => {
                let a = self.read_param(word, 1)?;
                let b = self.read_param(word, 2)?;
                let dst = self.write_target(word, 3)?;
                let value = match op {
                    1 => a.checked_add(b).ok_or(IntcodeError::Overflow { ip })?,
                    2 => a.checked_mul(b).ok_or(IntcodeError::Overflow { ip })?,
                    7 => i64::from(a < b),
                    _ => i64::from(a == b),
                };
                self.poke(dst, value);
                self.ip += 4;
            }
            3 => {
                let dst = self.write_target(word, 1)?;
                let value = self
                    .io
                    .read_input()
                    .ok_or(IntcodeError::InputUnderflow { ip })?;
                self.poke(dst, value);
                self.ip += 2;
            }
            4 => {
                let value = self.read_param(word, 1)?;
                self.ip += 2;
                return Ok(Step::Output(value));
            }
            op @ (5 | 6) => {
                let a = self.read_param(word, 1)?;
                let b = self.read_param(word, 2)?;
                if (a != 0) == (op == 5) {
                    self.ip = address(b)?;
                } else {
                    self.ip += 3;
                }
            }
            9 => {
                let a = self.read_param(word, 1)?;
                self.relative_base = self
                    .relative_base
                    .checked_add(a)
                    .ok_or(IntcodeError::Overflow { ip })?;
                self.ip += 2;
            }
            99 => {
                self.halted = true;
                return Ok(Step::Halted);
            }
            _ => return Err(IntcodeError::UnknownOpcode { opcode: word, ip }),
        }
        Ok(Step::Continue)
    }

    /// Step until an output, a missing input, or halt
    pub fn resume(&mut self) -> Result<State, IntcodeError> {
        loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Output(value)) => return Ok(State::Output(value)),
                Ok(Step::Halted) => return Ok(State::Halted),
                Err(IntcodeError::InputUnderflow { .. }) => return Ok(State::NeedsInput),
                Err(err) => return Err(err),
            }
        }
    }

    /// Step until halt, writing every output to the [`Io`]
    pub fn run_until_halt(&mut self) -> Result<(), IntcodeError> {
        loop {
            match self.step()? {
                Step::Continue => {}
                Step::Output(value) => self.io.write_output(value),
                Step::Halted => return Ok(()),
            }
        }
    }

    /// Lazily yield outputs until the machine halts or waits for input.
    ///
    /// After feeding more input, call `generate` again to carry on.
    pub fn generate(&mut self) -> Generate<'_, I> {
        Generate {
            machine: self,
            done: false,
        }
    }

    fn mode(&self, word: i64, n: u32) -> Result<Mode, IntcodeError> {
        match word / 10i64.pow(n + 1) % 10 {
            0 => Ok(Mode::Position),
            1 => Ok(Mode::Immediate),
            2 => Ok(Mode::Relative),
            mode => Err(IntcodeError::InvalidMode { mode, ip: self.ip }),
        }
    }

    fn read_param(&self, word: i64, n: u32) -> Result<i64, IntcodeError> {
        let raw = self.peek(self.ip + n as usize);
        Ok(match self.mode(word, n)? {
            Mode::Position => self.peek(address(raw)?),
            Mode::Immediate => raw,
            Mode::Relative => self.peek(self.relative(raw)?),
        })
    }

    fn write_target(&self, word: i64, n: u32) -> Result<usize, IntcodeError> {
        let raw = self.peek(self.ip + n as usize);
        match self.mode(word, n)? {
            Mode::Position => address(raw),
            Mode::Immediate => Err(IntcodeError::InvalidMode { mode: 1, ip: self.ip }),
            Mode::Relative => self.relative(raw),
        }
    }

    /// `raw` offset from the relative base, as an address
    fn relative(&self, raw: i64) -> Result<usize, IntcodeError> {
        let addr = raw
            .checked_add(self.relative_base)
            .ok_or(IntcodeError::Overflow { ip: self.ip })?;
        address(addr)
    }
}

fn address(raw: i64) -> Result<usize, IntcodeError> {
    usize::try_from(raw).map_err(|_| IntcodeError::Address { addr: raw })
}

/// Iterator returned by [`Intcode::generate`]
pub struct Generate<'m, I> {
    machine: &'m mut Intcode<I>,
    done: bool,
}

impl<I: Io> Iterator for Generate<'_, I> {
    type Item = Result<i64, IntcodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.machine.resume() {
            Ok(State::Output(value)) => Some(Ok(value)),
            Ok(State::NeedsInput | State::Halted) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
