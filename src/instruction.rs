//! The instruction model shared by the assembler, the binary image codec,
//! and the disassembler.

/// Maximum number of instructions a program may hold.
pub const PROGRAM_CAPACITY: usize = 1024;

/// A signed 64-bit machine word: the stack element type, the instruction
/// operand type, and the program-address type all at once.
pub type Word = i64;

/// The closed set of opcodes. Discriminants are part of the on-disk format
/// (§6 of the binary image spec) and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0,
    Push = 1,
    Dup = 2,
    Plus = 3,
    Minus = 4,
    Mult = 5,
    Div = 6,
    Jmp = 7,
    JmpIf = 8,
    Eq = 9,
    Halt = 10,
    PrintDebug = 11,
    Ret = 12,
}

impl Opcode {
    /// Decodes a raw opcode byte, as read from a binary image record.
    pub fn from_u8(byte: u8) -> Option<Opcode> {
        use Opcode::*;
        match byte {
            0 => Some(Nop),
            1 => Some(Push),
            2 => Some(Dup),
            3 => Some(Plus),
            4 => Some(Minus),
            5 => Some(Mult),
            6 => Some(Div),
            7 => Some(Jmp),
            8 => Some(JmpIf),
            9 => Some(Eq),
            10 => Some(Halt),
            11 => Some(PrintDebug),
            12 => Some(Ret),
            _ => None,
        }
    }

    /// The mnemonic the disassembler prints, and the assembler's encoder
    /// accepts, for this opcode. `Nop` has no mnemonic of its own — it is
    /// the silent fallback for unrecognized mnemonics (§4.2) and is
    /// disassembled as `nop`.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "nop",
            Opcode::Push => "push",
            Opcode::Dup => "dup",
            Opcode::Plus => "plus",
            Opcode::Minus => "min",
            Opcode::Mult => "mul",
            Opcode::Div => "div",
            Opcode::Jmp => "jmp",
            Opcode::JmpIf => "jmp_if",
            Opcode::Eq => "eq",
            Opcode::Halt => "hart",
            Opcode::PrintDebug => "print",
            Opcode::Ret => "ret",
        }
    }

    /// Whether this opcode's mnemonic form carries an operand, and is thus
    /// rendered by the disassembler as `mnemonic operand` rather than bare
    /// `mnemonic`.
    pub fn has_operand(self) -> bool {
        matches!(
            self,
            Opcode::Push | Opcode::Dup | Opcode::Jmp | Opcode::JmpIf
        )
    }
}

/// A single instruction: an opcode paired with its operand word. The
/// operand is meaningless for opcodes where `Opcode::has_operand` is false,
/// but is still stored (as `0`, by convention of this implementation) so
/// every instruction occupies exactly one fixed-size record on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operand: Word,
}

impl Instruction {
    pub fn new(opcode: Opcode, operand: Word) -> Instruction {
        Instruction { opcode, operand }
    }

    /// Convenience constructor for opcodes that take no operand.
    pub fn bare(opcode: Opcode) -> Instruction {
        Instruction { opcode, operand: 0 }
    }
}
