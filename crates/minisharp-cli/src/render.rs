//! Colored diagnostics on stderr.

use minisharp_checker::TypeError;
use minisharp_interpreter::Fault;
use minisharp_syntax::error::Error;
use owo_colors::OwoColorize;

/// A fatal front-end error with the offending source line underlined.
pub fn render_error(kind: &str, source: &str, err: &Error) {
    eprintln!("{}: {}", kind.red().bold(), err.msg.red());
    if let (Some(line), Some(col)) = (err.line, err.col) {
        eprintln!("  --> line {}, column {}", line, col);
        if let Some(src_line) = source.lines().nth(line.saturating_sub(1)) {
            let line_num_str = format!("{:3} | ", line);
            eprintln!("     |");
            eprintln!("{}{}", line_num_str.bright_black(), src_line);

            let mut marker = " ".repeat(line_num_str.len());
            marker.push_str(&" ".repeat(col.saturating_sub(1)));
            marker.push('^');
            eprintln!("{}{}", marker.red(), " error here".red());
            eprintln!("     |");
        }
    }
    suggest_for_syntax(err);
}

pub fn render_type_error(err: &TypeError) {
    eprintln!("{}: {}", "type error".yellow().bold(), err);
    suggest_for_type_error(err);
}

pub fn render_fault(fault: &Fault) {
    eprintln!("{}: {}", "runtime fault".magenta().bold(), fault);
    suggest_for_fault(fault);
}

fn help(line: &str) {
    eprintln!("{}", format!("Help: {}", line).yellow());
}

fn example(line: &str) {
    eprintln!("    {}", line.bright_black());
}

fn suggest_for_syntax(err: &Error) {
    let msg = err.msg.as_str();
    if msg.contains("Decimal literals") {
        help("Only integer constants can be written in source.");
        example("double half = 1 / 2;");
    } else if msg.contains("only int[]") {
        help("Arrays always hold int values.");
        example("int[] a = {1, 2, 3};");
    } else if msg.contains("Expected ';'") {
        help("Every declaration, assignment and return ends with ';'.");
    } else if msg.contains("'++' or '--'") {
        help("The last part of a for header must be i++ or i--.");
        example("for (int i = 0; i < n; i++) { }");
    } else if msg.contains("Expected '('") && (err.line, err.col) == (Some(1), Some(1)) {
        help("A program starts with its parameter list, which may be empty.");
        example("(int n) { return n; }");
    }
}

fn suggest_for_type_error(err: &TypeError) {
    match err {
        TypeError::NotDeclared { .. } => {
            help("Declare the variable with its type before using it.");
            example("int x = 0;");
        }
        TypeError::AlreadyDeclared { .. } => {
            help("Blocks do not open a new scope; pick a different name or assign instead.");
        }
        TypeError::DeclarationMismatch { .. } | TypeError::AssignmentMismatch { .. } => {
            help("int widens to double, but nothing converts back to int.");
        }
        TypeError::Comparison { op: "==", .. } => {
            help("'==' needs both sides to have the same numeric type.");
        }
        TypeError::LoopVariableArray { .. }
        | TypeError::LoopVariableType { .. }
        | TypeError::LoopInitNotInt { .. } => {
            example("for (int i = 0; i < a.length; i++) { }");
        }
        _ => {}
    }
}

fn suggest_for_fault(fault: &Fault) {
    match fault {
        Fault::IndexOutOfBounds { .. } => {
            help("Arrays are 0-indexed; compare the index against a.length first.");
        }
        Fault::MissingArguments { .. } => {
            help("Pass one argument per parameter after the file name.");
            example("minisharp program.ms 3 4.5");
        }
        Fault::MalformedArgument { .. } => {
            help("int parameters take whole numbers; other parameters take decimals.");
        }
        _ => {}
    }
}
