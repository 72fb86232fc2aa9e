use std::{
    fs,
    io::{self, Write},
    rc::Rc,
};

use clap::Parser;
use unical::{
    evaluate,
    interpreter::{evaluator::core::Environment, value::core::Value},
    reference::ReferenceTable,
};

/// unical is an easy to use calculator language for everyday math with units,
/// percentages, and a built in periodic table.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells unical to read the input from a file instead of the arguments.
    #[arg(short, long)]
    file: bool,

    /// Loads the element data from a JSON file instead of the bundled copy.
    #[arg(short, long)]
    elements: Option<String>,

    /// Statements to evaluate; leave empty to start the interactive prompt.
    contents: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let reference = Rc::new(load_reference(args.elements.as_deref()));
    let mut environment = Environment::new(reference);

    if args.contents.is_empty() {
        repl(&mut environment);
        return;
    }

    let script = if args.file {
        let path = args.contents.join(" ");
        fs::read_to_string(&path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        args.contents.join(" ")
    };

    match evaluate(&script, &mut environment) {
        Ok(program) => print_final(&program),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Loads the reference table, either from a user supplied JSON file or from
/// the copy compiled into the binary. Both failure modes end the process.
fn load_reference(path: Option<&str>) -> ReferenceTable {
    match path {
        Some(path) => {
            let source = fs::read_to_string(path).unwrap_or_else(|_| {
                eprintln!("Failed to read the element data file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            ReferenceTable::from_json(&source).unwrap_or_else(|e| {
                eprintln!("Failed to parse the element data file '{path}': {e}");
                std::process::exit(1);
            })
        },
        None => ReferenceTable::bundled().unwrap_or_else(|e| {
            eprintln!("Failed to parse the bundled element data: {e}");
            std::process::exit(1);
        }),
    }
}

/// Runs the interactive prompt against one persistent environment.
///
/// Each line evaluates on its own, so assignments and definitions stay
/// visible to later lines. Errors are printed and the prompt keeps accepting
/// input. The session ends on `quit` or end of input.
fn repl(environment: &mut Environment) {
    let stdin = io::stdin();

    loop {
        print!(">> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        let Ok(read) = stdin.read_line(&mut line) else {
            return;
        };
        if read == 0 || line.trim() == "quit" {
            return;
        }

        match evaluate(&line, environment) {
            Ok(program) => print_final(&program),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Prints the final statement's value. Nil results stay silent, so
/// assignments and definitions produce no output line.
fn print_final(program: &Value) {
    if let Some(value) = program.last_value()
        && !value.is_nil()
    {
        println!("{value}");
    }
}
