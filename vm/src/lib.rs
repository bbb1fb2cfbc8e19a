//! # stack-vm
//!
//! The execution engine for the tiny stack machine assembled by the sibling
//! `stack-asm` crate: a fixed-capacity evaluation stack, an instruction
//! pointer, and a fetch-decode-execute loop stepped under a caller-supplied
//! instruction budget.
//!
//! ## Example
//!
//! ```rust
//! use stack_asm::assembler::assemble;
//! use stack_vm::machine::Machine;
//!
//! let program = assemble("push 34\npush 35\nplus\nhart\n").unwrap();
//! let mut machine = Machine::load(program);
//! let mut diagnostics = Vec::new();
//! let status = machine.run(10, &mut diagnostics).unwrap();
//! assert_eq!(machine.stack(), &[69]);
//! println!("{status}");
//! ```

pub mod machine;
pub mod status;
