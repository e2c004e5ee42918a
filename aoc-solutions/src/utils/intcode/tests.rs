use super::*;
use proptest::prelude::*;

/// Outputs 999, 1000 or 1001 when its input is below, equal to or above 8
const COMPARE_TO_EIGHT: &str = "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,\
1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,999,1105,1,46,1101,1000,1,20,4,20,\
1105,1,46,98,99";

const QUINE: &str = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";

fn vm(text: &str) -> Intcode {
    text.parse().unwrap()
}

#[test]
fn test_echo_compare() {
    let mut machine = vm("3,9,8,9,10,9,4,9,99,-1,8");
    assert_eq!(machine.run([8]), Ok(vec![1]));
    machine.reset();
    assert_eq!(machine.run([7]), Ok(vec![0]));
}

#[test]
fn test_quine() {
    let expected: Vec<i64> = QUINE.split(',').map(|w| w.parse().unwrap()).collect();
    assert_eq!(vm(QUINE).run([]), Ok(expected));
}

#[test]
fn test_large_numbers() {
    assert_eq!(
        vm("1102,34915192,34915192,7,4,7,99,0").run([]),
        Ok(vec![1219070632396864])
    );
    assert_eq!(
        vm("104,1125899906842624,99").run([]),
        Ok(vec![1125899906842624])
    );
}

#[test]
fn test_memory_after_halt() {
    let mut machine = vm("1,9,10,3,2,3,11,0,99,30,40,50");
    assert_eq!(machine.run([]), Ok(vec![]));
    assert!(machine.is_halted());
    assert_eq!(machine.peek(0), 3500);
    assert_eq!(machine.peek(3), 70);

    machine.reset();
    assert_eq!(machine.peek(0), 1);
    assert!(!machine.is_halted());
}

#[test]
fn test_unwritten_memory_reads_zero() {
    let machine = vm("99");
    assert_eq!(machine.peek(10_000), 0);
    assert_eq!(vm("4,1000,99").run([]), Ok(vec![0]));
}

#[test]
fn test_poke_before_run() {
    let mut machine = vm("1,0,0,0,99");
    machine.poke(1, 4);
    machine.poke(2, 4);
    machine.run([]).unwrap();
    assert_eq!(machine.peek(0), 198);
}

#[test]
fn test_negative_address() {
    assert_eq!(
        vm("1,-1,0,0,99").run([]),
        Err(IntcodeError::Address { addr: -1 })
    );
    assert_eq!(
        vm("109,19,204,-34,99").run([]),
        Err(IntcodeError::Address { addr: -15 })
    );
}

#[test]
fn test_relative_input_and_output() {
    let mut machine = vm("109,10,203,0,204,0,99");
    assert_eq!(machine.run([77]), Ok(vec![77]));
    assert_eq!(machine.relative_base(), 10);
    assert_eq!(machine.peek(10), 77);
}

#[test]
fn test_invalid_modes() {
    assert_eq!(
        vm("11101,1,1,5,99").run([]),
        Err(IntcodeError::InvalidMode { mode: 1, ip: 0 })
    );
    assert_eq!(
        vm("301,0,0,0,99").run([]),
        Err(IntcodeError::InvalidMode { mode: 3, ip: 0 })
    );
}

#[test]
fn test_unknown_opcode() {
    assert_eq!(
        vm("1101,1,1,5,42").run([]),
        Err(IntcodeError::UnknownOpcode { opcode: 42, ip: 4 })
    );
}

#[test]
fn test_overflow() {
    assert_eq!(
        vm("1002,5,2,5,99,9223372036854775807").run([]),
        Err(IntcodeError::Overflow { ip: 0 })
    );
}

#[test]
fn test_relative_base_overflow() {
    // Base at i64::MAX, then one more step of the base, a read and a write past it
    assert_eq!(
        vm("109,9223372036854775807,109,1,99").run([]),
        Err(IntcodeError::Overflow { ip: 2 })
    );
    assert_eq!(
        vm("109,9223372036854775807,204,1,99").run([]),
        Err(IntcodeError::Overflow { ip: 2 })
    );
    let mut machine = vm("109,9223372036854775807,203,1,99");
    assert_eq!(machine.run([7]), Err(IntcodeError::Overflow { ip: 2 }));
    assert_eq!(machine.relative_base(), i64::MAX);
}

#[test]
fn test_input_underflow() {
    let mut machine = vm("3,0,99");
    assert_eq!(machine.run([]), Err(IntcodeError::InputUnderflow { ip: 0 }));
    assert_eq!(machine.resume(), Ok(State::NeedsInput));
    assert_eq!(machine.instruction_pointer(), 0);

    machine.add_input(5);
    assert_eq!(machine.resume(), Ok(State::Halted));
    assert_eq!(machine.peek(0), 5);
}

#[test]
fn test_single_steps() {
    let mut machine = vm("1101,2,3,5,99");
    assert_eq!(machine.step(), Ok(Step::Continue));
    assert_eq!(machine.peek(5), 5);
    assert_eq!(machine.instruction_pointer(), 4);
    assert_eq!(machine.step(), Ok(Step::Halted));
    assert_eq!(machine.step(), Ok(Step::Halted));
}

#[test]
fn test_explicit_halt() {
    let mut machine = vm("104,1,99");
    machine.halt();
    assert_eq!(machine.run([]), Ok(vec![]));
}

#[test]
fn test_generate_until_halt() {
    let mut machine = vm("104,1,104,2,104,3,99");
    let outputs: Vec<i64> = machine.generate().collect::<Result<_, _>>().unwrap();
    assert_eq!(outputs, vec![1, 2, 3]);
    assert!(machine.is_halted());
    assert!(machine.outputs().is_empty());
}

#[test]
fn test_generate_waits_for_input() {
    let mut machine = vm("3,0,4,0,3,0,4,0,99");
    machine.add_input(7);
    let mut outputs = machine.generate();
    assert_eq!(outputs.next(), Some(Ok(7)));
    assert_eq!(outputs.next(), None);
    assert_eq!(outputs.next(), None);

    machine.add_input(8);
    let rest: Vec<i64> = machine.generate().collect::<Result<_, _>>().unwrap();
    assert_eq!(rest, vec![8]);
    assert!(machine.is_halted());
}

#[test]
fn test_generate_surfaces_errors() {
    let mut machine = vm("104,1,42");
    let items: Vec<_> = machine.generate().collect();
    assert_eq!(
        items,
        vec![Ok(1), Err(IntcodeError::UnknownOpcode { opcode: 42, ip: 2 })]
    );
}

#[test]
fn test_clone_is_snapshot_and_fresh_is_empty() {
    let mut machine = vm("3,15,1006,15,14,1002,15,2,16,4,16,1105,1,0,99");
    machine.add_input(21);
    assert_eq!(machine.resume(), Ok(State::Output(42)));

    let mut snapshot = machine.clone();
    machine.add_input(5);
    snapshot.add_input(5);
    assert_eq!(machine.resume(), Ok(State::Output(10)));
    assert_eq!(snapshot.resume(), Ok(State::Output(10)));
    assert_eq!(snapshot.peek(15), 5);

    let mut fresh = machine.fresh();
    assert_eq!(fresh.instruction_pointer(), 0);
    assert_eq!(fresh.peek(15), 0);
    assert_eq!(fresh.resume(), Ok(State::NeedsInput));
}

#[test]
fn test_ascii_input() {
    let mut machine = vm("3,0,4,0,3,0,4,0,99");
    machine.add_ascii_input("A\n");
    assert_eq!(machine.run([]), Ok(vec![65, 10]));
}

#[derive(Debug, Default)]
struct LimitedIo {
    seen: Vec<i64>,
    limit: usize,
}

impl Io for LimitedIo {
    fn read_input(&mut self) -> Option<i64> {
        Some(7)
    }

    fn write_output(&mut self, value: i64) {
        self.seen.push(value);
    }

    fn halt_requested(&self) -> bool {
        self.seen.len() >= self.limit
    }
}

#[test]
fn test_custom_io_can_halt() {
    let program: Program = "3,7,4,7,1105,1,0".parse().unwrap();
    let io = LimitedIo {
        limit: 3,
        ..LimitedIo::default()
    };
    let mut machine = Intcode::with_io(program, io);
    assert_eq!(machine.run_until_halt(), Ok(()));
    assert!(machine.is_halted());
    assert_eq!(machine.io().seen, vec![7, 7, 7]);
}

#[test]
fn test_only_run_until_halt_writes_outputs() {
    let program: Program = "3,7,4,7,4,7,99,0".parse().unwrap();
    let io = LimitedIo {
        limit: usize::MAX,
        ..LimitedIo::default()
    };
    let mut machine = Intcode::with_io(program, io);
    assert_eq!(machine.resume(), Ok(State::Output(7)));
    assert_eq!(machine.generate().collect::<Result<Vec<_>, _>>(), Ok(vec![7]));
    assert!(machine.io().seen.is_empty());

    machine.reset();
    assert_eq!(machine.run_until_halt(), Ok(()));
    assert_eq!(machine.io().seen, vec![7, 7]);
}

#[test]
fn test_program_parse_errors() {
    assert!(matches!(
        "1,2, 3".parse::<Program>(),
        Err(IntcodeError::Parse { index: 2, .. })
    ));
    assert!(matches!(
        "1,,2".parse::<Program>(),
        Err(IntcodeError::Parse { index: 1, .. })
    ));
    assert!(matches!(
        "1,0,0,0,99\n".parse::<Program>(),
        Err(IntcodeError::Parse { index: 4, .. })
    ));
    assert!("".parse::<Program>().is_err());
    assert_eq!(
        "1,-2,99".parse::<Program>().unwrap().as_slice(),
        &[1, -2, 99]
    );
}

fn compare_to_eight(input: i64) -> i64 {
    match input.cmp(&8) {
        std::cmp::Ordering::Less => 999,
        std::cmp::Ordering::Equal => 1000,
        std::cmp::Ordering::Greater => 1001,
    }
}

proptest! {
    #[test]
    fn prop_compare_program(input in -50i64..50) {
        prop_assert_eq!(vm(COMPARE_TO_EIGHT).run([input]), Ok(vec![compare_to_eight(input)]));
    }

    #[test]
    fn prop_runs_are_deterministic(inputs in prop::collection::vec(-1000i64..1000, 0..8)) {
        let program = "3,7,4,7,1105,1,0";
        let mut a = vm(program);
        let mut b = vm(program);
        let first = a.run(inputs.clone());
        let second = b.run(inputs);
        prop_assert_eq!(first, second);
        prop_assert_eq!(a.outputs(), b.outputs());
        prop_assert_eq!(a.instruction_pointer(), b.instruction_pointer());
    }

    #[test]
    fn prop_reset_matches_fresh_machine(i in -50i64..50, j in -50i64..50) {
        let mut machine = vm(COMPARE_TO_EIGHT);
        machine.run([j]).unwrap();
        machine.reset();
        let after_reset = machine.run([i]);

        let mut fresh = machine.fresh();
        prop_assert_eq!(after_reset, fresh.run([i]));
    }
}
