use std::{
    cell::RefCell,
    fs,
    io::{self, BufRead, Write},
    rc::Rc,
};

use capuchin::{
    interpreter::{evaluator::core::eval_program, value::environment::Environment},
    parse,
};
use clap::Parser;

const PROMPT: &str = ">> ";

/// capuchin is a small, dynamically-typed, expression-oriented programming
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate the given source text instead of reading a script file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Print the final value of the script instead of discarding it.
    #[arg(short, long)]
    print: bool,

    /// Path of the script to run. Starts a REPL when omitted.
    script: Option<String>,
}

fn main() {
    let args = Args::parse();
    let env = Environment::new();

    match (args.eval, args.script) {
        (Some(source), _) => run(&source, &env, args.print),
        (None, Some(path)) => {
            let source = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });
            run(&source, &env, args.print);
        },
        (None, None) => repl(&env),
    }
}

/// Runs a whole script, reporting every parse error or the runtime error on
/// stderr. The final value is printed only when requested.
fn run(source: &str, env: &Rc<RefCell<Environment>>, print: bool) {
    let (program, errors) = parse(source);

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("parse error: {error}");
        }
        std::process::exit(1);
    }

    match eval_program(&program, env) {
        Ok(value) => {
            if print && !value.is_null() {
                println!("{value}");
            }
        },
        Err(error) => {
            eprintln!("runtime error: {error}");
            std::process::exit(1);
        },
    }
}

/// Reads statements line by line, evaluating each against one shared
/// environment so bindings survive across inputs.
fn repl(env: &Rc<RefCell<Environment>>) {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("{PROMPT}");

        if io::stdout().flush().is_err() {
            return;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        let (program, errors) = parse(&line);

        if !errors.is_empty() {
            for error in &errors {
                eprintln!("\tparse error: {error}");
            }
            continue;
        }

        match eval_program(&program, env) {
            Ok(value) => println!("{value}"),
            Err(error) => eprintln!("\truntime error: {error}"),
        }
    }
}
