//! Thin CLI front end: `stack-asm <input.asm> <output.img>` assembles a
//! source file to a binary image; `stack-asm --disasm <input.img>`
//! disassembles an image back to mnemonic text on stdout. All behavior
//! lives in the library; this binary only parses arguments and does file
//! I/O.

use std::env;
use std::process::ExitCode;

use stack_asm::{assembler, disassembler, image};

fn usage() -> String {
    "usage:\n  stack-asm <input.asm> <output.img>\n  stack-asm --disasm <input.img>".to_string()
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.as_slice() {
        [flag, path] if flag == "--disasm" => {
            let program = image::read_file(path).map_err(|e| format!("{path}: {e}"))?;
            print!("{}", disassembler::disassemble(&program));
            Ok(())
        }
        [input, output] => {
            let source = std::fs::read_to_string(input).map_err(|e| format!("{input}: {e}"))?;
            let program = assembler::assemble(&source).map_err(|e| e.to_string())?;
            image::write_file(output, &program).map_err(|e| format!("{output}: {e}"))?;
            Ok(())
        }
        _ => Err(usage()),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
