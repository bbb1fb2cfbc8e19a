//! End-to-end assemble-then-run scenarios against the execution engine.

use stack_asm::assembler::assemble;
use stack_asm::image::{decode_program, encode_program};
use stack_vm::machine::Machine;
use stack_vm::status::Status;

fn run_source(source: &str, budget: i64) -> (Machine, Status) {
    let program = assemble(source).unwrap();
    let mut machine = Machine::load(program);
    let mut sink = Vec::new();
    let status = machine.run(budget, &mut sink).unwrap();
    (machine, status)
}

#[test]
fn s1_constant_arithmetic() {
    let (machine, status) = run_source("push 34\npush 35\nplus\nhart\n", 10);
    assert_eq!(status, Status::Ok);
    assert!(machine.halted());
    assert_eq!(machine.stack(), &[69]);
}

#[test]
fn s2_division_by_zero_freezes_state_at_the_failing_instruction() {
    let (machine, status) = run_source("push 10\npush 0\ndiv\nhart\n", 10);
    assert_eq!(status, Status::DivByZero);
    assert_eq!(machine.stack(), &[10, 0]);
    assert_eq!(machine.ip(), 2);
}

#[test]
fn s3_forward_label_resolves_and_runs() {
    let (machine, status) = run_source("jmp end\npush 1\nend:\npush 2\nhart\n", 10);
    assert_eq!(status, Status::Ok);
    assert_eq!(machine.stack(), &[2]);
}

#[test]
fn s4_duplicate_and_equal() {
    let (machine, status) = run_source("push 5\ndup 0\neq\nhart\n", 10);
    assert_eq!(status, Status::Ok);
    assert_eq!(machine.stack(), &[1]);
}

#[test]
fn s5_stack_underflow_on_the_very_first_instruction() {
    let (machine, status) = run_source("plus\nhart\n", 10);
    assert_eq!(status, Status::StackUnderflow);
    assert!(machine.stack().is_empty());
    assert_eq!(machine.ip(), 0);
}

#[test]
fn s6_illegal_instruction_access_on_an_empty_program() {
    let mut machine = Machine::load(Vec::new());
    let mut sink = Vec::new();
    let status = machine.run(1, &mut sink).unwrap();
    assert_eq!(status, Status::IllegalInstAccess);
}

#[test]
fn running_the_same_program_twice_is_deterministic() {
    let source = "push 1\npush 2\nplus\npush 3\nmul\nhart\n";
    let (machine_a, status_a) = run_source(source, -1);
    let (machine_b, status_b) = run_source(source, -1);
    assert_eq!(status_a, status_b);
    assert_eq!(machine_a.stack(), machine_b.stack());
    assert_eq!(machine_a.ip(), machine_b.ip());
}

#[test]
fn an_assembled_program_surives_a_binary_image_round_trip_before_running() {
    let program = assemble("push 34\npush 35\nplus\nhart\n").unwrap();
    let bytes = encode_program(&program);
    let reloaded = decode_program(&bytes).unwrap();
    let mut machine = Machine::load(reloaded);
    let mut sink = Vec::new();
    let status = machine.run(-1, &mut sink).unwrap();
    assert_eq!(status, Status::Ok);
    assert_eq!(machine.stack(), &[69]);
}

#[test]
fn stack_never_exceeds_its_capacity_even_on_overflow() {
    // A tight loop that keeps pushing forever; only `STACK_CAPACITY` words
    // fit before the engine reports an overflow instead of growing further.
    let (machine, status) = run_source("loop:\npush 1\njmp loop\n", -1);
    assert_eq!(status, Status::StackOverflow);
    assert!(machine.stack().len() <= stack_vm::machine::STACK_CAPACITY);
}

#[test]
fn budget_of_one_executes_exactly_one_instruction() {
    let program = assemble("push 1\npush 2\nplus\nhart\n").unwrap();
    let mut machine = Machine::load(program);
    let mut sink = Vec::new();
    machine.run(1, &mut sink).unwrap();
    assert_eq!(machine.ip(), 1);
    assert_eq!(machine.stack(), &[1]);
}

#[test]
fn the_diagnostic_sink_receives_a_stack_dump_per_successful_step() {
    let program = assemble("push 1\npush 2\nhart\n").unwrap();
    let mut machine = Machine::load(program);
    let mut sink = Vec::new();
    machine.run(-1, &mut sink).unwrap();
    let output = String::from_utf8(sink).unwrap();
    assert_eq!(output.matches("Stack:").count(), 3);
    assert!(output.contains("  1\n"));
    assert!(output.contains("  1\n  2\n"));
}

#[test]
fn an_empty_stack_dump_reads_empty() {
    let program = assemble("nop\nhart\n").unwrap();
    let mut machine = Machine::load(program);
    let mut sink = Vec::new();
    machine.run(-1, &mut sink).unwrap();
    let output = String::from_utf8(sink).unwrap();
    assert!(output.contains("Stack:\n  [empty]\n"));
}
