use calc_engine::engine::Engine;
use calc_engine::format::format_value;
use calc_engine::functions::AngleMode;
use calc_engine::keypad::tokenize_keys;
use std::io::{self, Write};

fn main() {
    println!("Calculator v0.1.0");
    println!("Enter keys separated by spaces, e.g.  3 + 4 * 2 =");
    println!("Type 'EXIT' to quit, 'HELP' for the key list\n");

    let mut engine = Engine::new();
    let stdin = io::stdin();
    let mut line_buffer = String::new();

    loop {
        // Prompt
        print!("> ");
        io::stdout().flush().unwrap();

        // Read line
        line_buffer.clear();
        match stdin.read_line(&mut line_buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line_buffer.trim();

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if input.eq_ignore_ascii_case("mem") {
            println!(
                "Memory: {}  Angle mode: {}",
                format_value(engine.memory()),
                angle_mode_name(engine.angle_mode())
            );
            continue;
        }

        if input.is_empty() {
            continue;
        }

        match process_line(&mut engine, input) {
            Ok(()) => println!("{}", engine.display_text()),
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn process_line(engine: &mut Engine, line: &str) -> Result<(), String> {
    // Reject the whole line before pressing anything, so a typo does not
    // leave the calculation half-entered
    let keys = tokenize_keys(line).map_err(|e| e.to_string())?;

    for key in keys {
        engine.press(key);
    }

    Ok(())
}

fn angle_mode_name(mode: AngleMode) -> &'static str {
    match mode {
        AngleMode::Radians => "radians",
        AngleMode::Degrees => "degrees",
    }
}

fn print_help() {
    println!("Calculator - Available Keys:");
    println!();
    println!("Entry:");
    println!("  0-9 or multi-digit numbers - Enter digits (3.14 works too)");
    println!("  .                          - Decimal point");
    println!("  bs                         - Backspace");
    println!("  c                          - Clear (memory is kept)");
    println!();
    println!("Operators (chained left to right, no precedence):");
    println!("  + - * / ^                  - Add, subtract, multiply, divide, power");
    println!("  =                          - Evaluate the pending operation");
    println!();
    println!("Functions (apply to the displayed value):");
    println!("  sin cos tan                - Trigonometry (see 'mode')");
    println!("  log ln                     - Base-10 and natural logarithm");
    println!("  sqrt sqr                   - Square root, square");
    println!("  !                          - Factorial");
    println!("  1/x                        - Reciprocal");
    println!("  pi e                       - Constants");
    println!();
    println!("Modes and memory:");
    println!("  mode                       - Toggle radians/degrees");
    println!("  m+ m- mr mc                - Memory add, subtract, recall, clear");
    println!();
    println!("Commands:");
    println!("  MEM                        - Show the memory register and angle mode");
    println!("  HELP                       - This text");
    println!("  EXIT                       - Quit");
    println!();
    println!("Examples:");
    println!("  3 + 4 * 2 =                - Shows 14 (left-to-right evaluation)");
    println!("  mode 90 sin                - Sine of 90 degrees");
    println!("  5 m+ c mr                  - Store 5, clear, recall it");
    println!();
}
