//! Translates one trimmed, comment-free source line into an `Instruction`.
//!
//! `jmp`/`jmp_if` residues are classified with [`Operand`] rather than the
//! original design's in-band `-1` sentinel (§9, resolved "sentinel
//! collision"): `-1` is a perfectly good literal, so it can't also mean
//! "this is a label name". Only `jmp`/`jmp_if` ever produce `Operand::Name`
//! — every other operand-bearing mnemonic takes a plain signed literal.

use crate::instruction::{Instruction, Opcode, Word};
use crate::lex;

/// The result of classifying a jump target residue.
enum Operand<'a> {
    Literal(Word),
    Name(&'a str),
}

fn classify_jump_target(residue: &str) -> Operand<'_> {
    match residue.as_bytes().first() {
        Some(b) if b.is_ascii_digit() => Operand::Literal(lex::parse_int(residue)),
        _ => Operand::Name(residue),
    }
}

/// An optional leading `-` followed by a digit run, e.g. `34` or `-1`.
/// Unlike `lex::parse_int`, this understands the sign so `push -1` and
/// `push 34` are both ordinary literals rather than the former tripping the
/// "not a literal" sentinel.
fn parse_signed_literal(residue: &str) -> Option<Word> {
    let (negative, digits) = match residue.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, residue),
    };
    match digits.as_bytes().first() {
        Some(b) if b.is_ascii_digit() => {
            let value = lex::parse_int(digits);
            Some(if negative { -value } else { value })
        }
        _ => None,
    }
}

/// One encoded line: the instruction to append to the program, and — for a
/// `jmp`/`jmp_if` whose target was a label name — the name to record in the
/// unresolved-reference table.
pub struct EncodedLine {
    pub instruction: Instruction,
    pub pending_label: Option<String>,
}

impl EncodedLine {
    fn bare(opcode: Opcode) -> EncodedLine {
        EncodedLine {
            instruction: Instruction::bare(opcode),
            pending_label: None,
        }
    }
}

/// Encodes a single trimmed source line (no label, no comment, no trailing
/// newline). An unrecognized mnemonic silently encodes as `Opcode::Nop`
/// (§4.2, §9 — a known, deliberately kept tolerance, not an oversight).
pub fn encode_line(line: &str) -> EncodedLine {
    let mut residue = line;
    let mnemonic = lex::chop_blank(&mut residue);
    let residue = lex::trim_right(lex::trim_left(residue));

    match mnemonic {
        "push" => literal_line(Opcode::Push, residue),
        "dup" => literal_line(Opcode::Dup, residue),
        "plus" => EncodedLine::bare(Opcode::Plus),
        "min" => EncodedLine::bare(Opcode::Minus),
        "mul" => EncodedLine::bare(Opcode::Mult),
        "div" => EncodedLine::bare(Opcode::Div),
        "eq" => EncodedLine::bare(Opcode::Eq),
        "jmp" => jump_line(Opcode::Jmp, residue),
        "jmp_if" => jump_line(Opcode::JmpIf, residue),
        "hart" => EncodedLine::bare(Opcode::Halt),
        "print" => EncodedLine::bare(Opcode::PrintDebug),
        "ret" => EncodedLine::bare(Opcode::Ret),
        _ => EncodedLine::bare(Opcode::Nop),
    }
}

fn literal_line(opcode: Opcode, residue: &str) -> EncodedLine {
    // A malformed literal (no digits at all) falls back to -1, matching the
    // original implementation's behavior for garbage operands — there is no
    // assembly-time error path for this in §7.
    let value = parse_signed_literal(residue).unwrap_or(-1);
    EncodedLine {
        instruction: Instruction::new(opcode, value),
        pending_label: None,
    }
}

fn jump_line(opcode: Opcode, residue: &str) -> EncodedLine {
    match classify_jump_target(residue) {
        Operand::Literal(value) => EncodedLine {
            instruction: Instruction::new(opcode, value),
            pending_label: None,
        },
        Operand::Name(name) => EncodedLine {
            // The operand is a placeholder; pass 2 always overwrites it when
            // assembly succeeds, and assembly fails outright otherwise.
            instruction: Instruction::new(opcode, -1),
            pending_label: Some(name.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_encodes_a_positive_literal() {
        let encoded = encode_line("push 34");
        assert_eq!(encoded.instruction, Instruction::new(Opcode::Push, 34));
        assert!(encoded.pending_label.is_none());
    }

    #[test]
    fn push_encodes_a_negative_literal_without_sentinel_collision() {
        let encoded = encode_line("push -1");
        assert_eq!(encoded.instruction, Instruction::new(Opcode::Push, -1));
    }

    #[test]
    fn jmp_with_a_literal_address_needs_no_patch() {
        let encoded = encode_line("jmp 7");
        assert_eq!(encoded.instruction, Instruction::new(Opcode::Jmp, 7));
        assert!(encoded.pending_label.is_none());
    }

    #[test]
    fn jmp_with_a_label_is_captured_as_pending() {
        let encoded = encode_line("jmp end");
        assert_eq!(encoded.pending_label.as_deref(), Some("end"));
    }

    #[test]
    fn jmp_if_accepts_a_label_like_jmp() {
        let encoded = encode_line("jmp_if loop");
        assert_eq!(encoded.pending_label.as_deref(), Some("loop"));
    }

    #[test]
    fn unrecognized_mnemonic_falls_back_to_nop() {
        let encoded = encode_line("frobnicate 1 2 3");
        assert_eq!(encoded.instruction, Instruction::bare(Opcode::Nop));
    }

    #[test]
    fn min_mul_map_to_minus_and_mult() {
        assert_eq!(encode_line("min").instruction.opcode, Opcode::Minus);
        assert_eq!(encode_line("mul").instruction.opcode, Opcode::Mult);
    }

    #[test]
    fn print_and_ret_are_textually_exposed() {
        assert_eq!(encode_line("print").instruction.opcode, Opcode::PrintDebug);
        assert_eq!(encode_line("ret").instruction.opcode, Opcode::Ret);
    }
}
