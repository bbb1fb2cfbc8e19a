//! Thin CLI front end: `stack-vm <input.img> [--budget N]` loads a binary
//! program image and runs it, dumping the stack after every step and
//! printing the terminal status. All behavior lives in the library; this
//! binary only parses arguments, does file I/O, and reports the result.

use std::env;
use std::process::ExitCode;

use stack_asm::image;
use stack_vm::machine::Machine;
use stack_vm::status::Status;

fn usage() -> String {
    "usage: stack-vm <input.img> [--budget N]".to_string()
}

struct Args {
    path: String,
    budget: i64,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    match raw {
        [path] => Ok(Args {
            path: path.clone(),
            budget: -1,
        }),
        [path, flag, value] if flag == "--budget" => {
            let budget = value
                .parse::<i64>()
                .map_err(|_| format!("--budget expects an integer, got `{value}`"))?;
            Ok(Args {
                path: path.clone(),
                budget,
            })
        }
        _ => Err(usage()),
    }
}

fn run() -> Result<Status, String> {
    let raw_args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&raw_args)?;

    let program = image::read_file(&args.path).map_err(|e| format!("{}: {e}", args.path))?;
    let mut machine = Machine::load(program);
    let mut diagnostics = std::io::stdout();
    let status = machine
        .run(args.budget, &mut diagnostics)
        .map_err(|e| e.to_string())?;

    println!("{status}");
    Ok(status)
}

fn main() -> ExitCode {
    match run() {
        Ok(Status::Ok) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
