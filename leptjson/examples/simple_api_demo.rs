// Example demonstrating the parse API on a handful of documents

use leptjson::{parse, ParseError, Value};

fn main() -> Result<(), ParseError> {
    let inputs = ["null", " true ", "false", "-0", "3.1416", "1E+10", "1e400", "01", "tru"];

    for json in inputs {
        print!("Input: {json:?} -> ");
        match parse(json) {
            Ok(Value::Number(n)) => println!("Number: {n}"),
            Ok(value) => println!("{}", value.get_type()),
            Err(e) => println!("Error: {e}"),
        }
    }

    // Errors propagate with `?` like any other Rust error
    let value = parse("  42  ")?;
    println!();
    println!("Parsed: {}", value.get_number());
    Ok(())
}
