//! Renders a program back into its textual mnemonic form, one instruction
//! per line. No compatibility contract beyond the mnemonic strings (§4.5).

use std::fmt::Write as _;

use crate::instruction::Instruction;

/// Disassembles `program` into a newline-terminated listing. Uses the same
/// space-separated syntax the encoder accepts, so the listing reassembles
/// to the identical program.
pub fn disassemble(program: &[Instruction]) -> String {
    let mut out = String::new();
    for inst in program {
        if inst.opcode.has_operand() {
            writeln!(out, "{} {}", inst.opcode.mnemonic(), inst.operand).unwrap();
        } else {
            writeln!(out, "{}", inst.opcode.mnemonic()).unwrap();
        }
    }
    out
}
