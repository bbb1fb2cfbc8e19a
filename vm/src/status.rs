//! The engine's closed error taxonomy. Stable numeric order matters: it is
//! part of the external contract tests rely on, so variants are never
//! reordered, only appended to (there is no room left to append to in this
//! instruction set's closed design, but the discriminants are still pinned
//! for clarity).

use std::fmt;

/// Terminal result of a single `step` or of a `run` loop. `IllegalInst` and
/// `IllegalOperandType` round out the closed taxonomy but are never
/// produced by `Machine::step` — every opcode byte is validated at image
/// decode time, and `Word` is the only operand type this machine has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    Ok = 0,
    StackOverflow = 1,
    StackUnderflow = 2,
    IllegalInst = 3,
    IllegalInstAccess = 4,
    IllegalOperand = 5,
    DivByZero = 6,
    IllegalOperandType = 7,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "OK",
            Status::StackOverflow => "STACK_OVERFLOW",
            Status::StackUnderflow => "STACK_UNDERFLOW",
            Status::IllegalInst => "ILLEGAL_INST",
            Status::IllegalInstAccess => "ILLEGAL_INST_ACCESS",
            Status::IllegalOperand => "ILLEGAL_OPERAND",
            Status::DivByZero => "DIV_BY_ZERO",
            Status::IllegalOperandType => "ILLEGAL_OPERAND_TYPE",
        };
        f.write_str(name)
    }
}

impl std::error::Error for Status {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_match_the_documented_numeric_order() {
        assert_eq!(Status::Ok as i32, 0);
        assert_eq!(Status::StackOverflow as i32, 1);
        assert_eq!(Status::StackUnderflow as i32, 2);
        assert_eq!(Status::IllegalInst as i32, 3);
        assert_eq!(Status::IllegalInstAccess as i32, 4);
        assert_eq!(Status::IllegalOperand as i32, 5);
        assert_eq!(Status::DivByZero as i32, 6);
        assert_eq!(Status::IllegalOperandType as i32, 7);
    }

    #[test]
    fn display_prints_the_screaming_snake_case_name() {
        assert_eq!(Status::DivByZero.to_string(), "DIV_BY_ZERO");
        assert_eq!(Status::Ok.to_string(), "OK");
    }
}
