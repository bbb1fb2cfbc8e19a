//! Two-pass assembler: pass 1 walks the source once, emitting instructions
//! and recording every label definition and every forward jump reference;
//! pass 2 patches the forward references now that every label's address is
//! known.

pub mod error;
mod encoder;
pub mod symbol_table;
pub mod unresolved;

pub use error::AsmError;
use symbol_table::SymbolTable;
use unresolved::UnresolvedTable;

use crate::instruction::{Instruction, Word, PROGRAM_CAPACITY};
use crate::lex;

/// Maximum number of labels a program may define, and the maximum number of
/// forward jump references it may contain. Mirrors `PROGRAM_CAPACITY`'s
/// role: a fixed ceiling rather than a growable table.
pub const LABEL_CAPACITY: usize = 8;

/// Assembles `source` into a program.
///
/// Pass 1 strips comments and whitespace line by line, records label
/// definitions (`name:`) in a [`SymbolTable`] at the address of the next
/// instruction, and encodes every other line into an [`Instruction`],
/// queuing any `jmp`/`jmp_if` whose target was a label name in an
/// [`UnresolvedTable`] rather than resolving it immediately.
///
/// Pass 2 walks the unresolved table and patches each queued instruction's
/// operand with its label's now-known address.
pub fn assemble(source: &str) -> Result<Vec<Instruction>, AsmError> {
    let mut program: Vec<Instruction> = Vec::new();
    let mut labels = SymbolTable::new();
    let mut unresolved = UnresolvedTable::new();

    let mut rest = source;
    while !rest.is_empty() {
        let raw_line = lex::chop_until(&mut rest, b'\n');
        let line = lex::trim_right(lex::trim_left(lex::strip_comment(raw_line)));

        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_suffix(':') {
            labels.insert(name, program.len() as Word)?;
            continue;
        }

        if program.len() >= PROGRAM_CAPACITY {
            return Err(AsmError::ProgramCapacityExceeded);
        }

        let encoded = encoder::encode_line(line);
        program.push(encoded.instruction);
        if let Some(name) = encoded.pending_label {
            // Recorded as the index one past the instruction it belongs to,
            // matching the original off-by-one addressing this assembler
            // preserves for bit-compatibility with existing images (§9).
            unresolved.push(name, program.len())?;
        }
    }

    for (name, instruction_index) in unresolved.iter() {
        let address = labels
            .get(name)
            .ok_or_else(|| AsmError::UndefinedLabel(name.clone()))?;
        program[instruction_index - 1].operand = address;
    }

    Ok(program)
}
