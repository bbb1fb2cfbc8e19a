//! # stack-asm
//!
//! Two-pass assembler, binary image codec, and disassembler for a tiny
//! stack-based virtual machine.
//!
//! ## Pipeline
//!
//! Assembling a program goes through three stages:
//!
//! 1. **Lexical utilities** (`lex`) — whitespace trimming, delimiter
//!    chopping, and integer parsing over string slices. Pure, total
//!    functions; none of them allocate or can fail.
//! 2. **Assembler** (`assembler`) — a two-pass translator. Pass one scans
//!    the source, builds a label table, and emits instructions, recording
//!    any jump whose target label isn't known yet. Pass two patches those
//!    jumps once every label has been seen.
//! 3. **Binary image codec** (`image`) — serializes the resulting
//!    `Vec<Instruction>` to and from the fixed-size on-disk record format
//!    consumed by the execution engine in the sibling `stack-vm` crate.
//!
//! `disassembler` provides the inverse of assembly: turning a program back
//! into the textual mnemonic form, for eyeballing images.
//!
//! ## Example
//!
//! ```rust
//! use stack_asm::assembler::assemble;
//! use stack_asm::disassembler::disassemble;
//!
//! let source = "push 34\npush 35\nplus\nhart\n";
//! let program = assemble(source).unwrap();
//! assert_eq!(program.len(), 4);
//! println!("{}", disassemble(&program));
//! ```

pub mod assembler;
pub mod disassembler;
pub mod image;
pub mod instruction;
pub mod lex;
