use std::io::{self, BufRead, Write};

use clap::Parser;
use prefixa::{assign, evaluate, Context};

/// prefixa is an interactive calculator that rewrites infix arithmetic
/// expressions to prefix notation and evaluates them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the
    /// interactive session.
    #[arg(short, long)]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        let context = Context::new();
        match evaluate(&expression, &context) {
            Ok(result) => {
                println!("Prefix: {}", result.prefix);
                println!("Evaluated Result: {}", result.value);
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    print_menu();

    let mut context = Context::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line == "$$" {
            break;
        }

        if !dispatch_command(line, &mut context) {
            match evaluate(line, &context) {
                Ok(result) => {
                    println!("\tPrefix: {}", result.prefix);
                    println!("\tEvaluated Result: {}", result.value);
                },
                Err(e) => eprintln!("{e}"),
            }
        }
    }
}

/// Handles the `VARS`, `CLEAR` and `LET` commands, matched case-insensitively.
///
/// Returns `true` when the line was a command; everything else — including a
/// `LET` line with no `=`, as in the original grammar — falls through to
/// plain expression evaluation.
fn dispatch_command(line: &str, context: &mut Context) -> bool {
    let upper = line.to_uppercase();

    if upper == "VARS" {
        if context.is_empty() {
            println!("No variables stored.");
        } else {
            println!("Stored variables:");
            for (name, value) in context.variables() {
                println!("{name} = {value}");
            }
        }
        return true;
    }

    if upper == "CLEAR" {
        context.clear();
        println!("All variables cleared.");
        return true;
    }

    if upper.starts_with("LET ") {
        let Some(equals) = line.find('=') else {
            return false;
        };

        // The name is everything between the keyword and the first '='.
        let name = line[3..equals].trim();
        let expression = &line[equals + 1..];

        match assign(name, expression, context) {
            Ok(value) => println!("\tVariable {name} = {value}"),
            Err(e) => eprintln!("{e}"),
        }
        return true;
    }

    false
}

fn print_menu() {
    println!("Arithmetic Expression Evaluator");
    println!("Enter infix expressions (e.g., '2 + 3 * 4' or 'x + y').");
    println!("Supports operators: +, -, *, /, ^, %");
    println!("Assign variables with 'LET <var> = <exp>' (e.g., 'LET x = 5').");
    println!("View variables with 'VARS' and clear variables with 'CLEAR'.");
    println!("Arbitrary spaces are allowed. Enter '$$' to exit.");
}
