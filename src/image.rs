//! Binary image codec.
//!
//! A program image is a flat sequence of fixed-size records, one per
//! instruction: `{ u8 opcode, 7 bytes zero padding, i64 operand little-endian }`,
//! 16 bytes each. This commits to an explicit little-endian, no-implicit-padding
//! layout rather than leaning on host `#[repr(C)]` byte order, so a file
//! written by one build reads identically on any other — the only
//! requirement §6 actually imposes is that a build be self-consistent, and
//! an explicit layout gets that for free plus portability.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::instruction::{Instruction, Opcode, PROGRAM_CAPACITY};

/// The on-disk size of a single instruction record, in bytes.
pub const RECORD_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The image's length is not a whole number of records.
    TruncatedRecord { byte_len: usize },
    /// A record's opcode byte is not one of the assigned opcodes.
    UnknownOpcode { record_index: usize, byte: u8 },
    /// The image holds more records than `PROGRAM_CAPACITY` allows.
    TooManyRecords { record_count: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TruncatedRecord { byte_len } => write!(
                f,
                "ERROR: image `length` is not a multiple of {RECORD_SIZE} bytes (got {byte_len})"
            ),
            DecodeError::UnknownOpcode { record_index, byte } => write!(
                f,
                "ERROR: record `{record_index}` has unknown opcode byte `{byte}`"
            ),
            DecodeError::TooManyRecords { record_count } => write!(
                f,
                "ERROR: image holds `{record_count}` records, exceeding capacity {PROGRAM_CAPACITY}"
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Serializes a program to its on-disk record representation.
pub fn encode_program(program: &[Instruction]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(program.len() * RECORD_SIZE);
    for inst in program {
        let mut record = [0u8; RECORD_SIZE];
        record[0] = inst.opcode as u8;
        record[8..16].copy_from_slice(&inst.operand.to_le_bytes());
        bytes.extend_from_slice(&record);
    }
    bytes
}

/// Deserializes a program from its on-disk record representation.
pub fn decode_program(bytes: &[u8]) -> Result<Vec<Instruction>, DecodeError> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(DecodeError::TruncatedRecord {
            byte_len: bytes.len(),
        });
    }

    let record_count = bytes.len() / RECORD_SIZE;
    if record_count > PROGRAM_CAPACITY {
        return Err(DecodeError::TooManyRecords { record_count });
    }

    let mut program = Vec::with_capacity(record_count);
    for (i, record) in bytes.chunks_exact(RECORD_SIZE).enumerate() {
        let opcode = Opcode::from_u8(record[0]).ok_or(DecodeError::UnknownOpcode {
            record_index: i,
            byte: record[0],
        })?;
        let mut operand_bytes = [0u8; 8];
        operand_bytes.copy_from_slice(&record[8..16]);
        let operand = i64::from_le_bytes(operand_bytes);
        program.push(Instruction::new(opcode, operand));
    }
    Ok(program)
}

/// Writes a program image to `path`, overwriting any existing file.
pub fn write_file(path: impl AsRef<Path>, program: &[Instruction]) -> io::Result<()> {
    fs::write(path, encode_program(program))
}

/// Reads and decodes a program image from `path`.
pub fn read_file(path: impl AsRef<Path>) -> io::Result<Vec<Instruction>> {
    let bytes = fs::read(path)?;
    decode_program(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}
