use calc_engine::engine::Engine;
use calc_engine::format::parse_number;
use calc_engine::keypad::tokenize_keys;

/// Helper to feed a line of key presses into the engine
fn press_line(engine: &mut Engine, line: &str) {
    for key in tokenize_keys(line).unwrap() {
        engine.press(key);
    }
}

#[test]
fn test_simple_addition() {
    let mut engine = Engine::new();
    press_line(&mut engine, "3 + 4 =");
    assert_eq!(engine.display_text(), "7");
}

#[test]
fn test_chained_operators_ignore_precedence() {
    let mut engine = Engine::new();
    press_line(&mut engine, "3 + 4 * 2 =");
    // Left-to-right: (3 + 4) * 2, not 3 + (4 * 2)
    assert_eq!(engine.display_text(), "14");
}

#[test]
fn test_decimal_arithmetic() {
    let mut engine = Engine::new();
    press_line(&mut engine, "1.5 * 4 =");
    assert_eq!(engine.display_text(), "6");
}

#[test]
fn test_power_operator() {
    let mut engine = Engine::new();
    press_line(&mut engine, "2 ^ 10 =");
    assert_eq!(engine.display_text(), "1024");
}

#[test]
fn test_division_by_zero_displays_infinity() {
    let mut engine = Engine::new();
    press_line(&mut engine, "5 / 0 =");
    assert_eq!(engine.display_text(), "Infinity");
}

#[test]
fn test_zero_over_zero_displays_nan() {
    let mut engine = Engine::new();
    press_line(&mut engine, "0 / 0 =");
    assert_eq!(engine.display_text(), "NaN");
}

#[test]
fn test_repeated_equals_leaves_result_unchanged() {
    let mut engine = Engine::new();
    press_line(&mut engine, "10 - 3 = =");
    assert_eq!(engine.display_text(), "7");
}

#[test]
fn test_result_feeds_the_next_calculation() {
    let mut engine = Engine::new();
    press_line(&mut engine, "6 * 7 =");
    assert_eq!(engine.display_text(), "42");
    press_line(&mut engine, "- 2 =");
    assert_eq!(engine.display_text(), "40");
}

#[test]
fn test_function_result_feeds_a_pending_operation() {
    let mut engine = Engine::new();
    press_line(&mut engine, "9 sqrt + 1 =");
    assert_eq!(engine.display_text(), "4");
}

#[test]
fn test_factorial_key() {
    let mut engine = Engine::new();
    press_line(&mut engine, "5 !");
    assert_eq!(engine.display_text(), "120");
}

#[test]
fn test_factorial_overflow_displays_infinity() {
    let mut engine = Engine::new();
    press_line(&mut engine, "171 !");
    assert_eq!(engine.display_text(), "Infinity");
}

#[test]
fn test_sine_in_degree_mode() {
    let mut engine = Engine::new();
    press_line(&mut engine, "mode 90 sin");
    let shown = parse_number(engine.display_text());
    assert!((shown - 1.0).abs() < 1e-12);
}

#[test]
fn test_angle_mode_survives_clear() {
    let mut engine = Engine::new();
    press_line(&mut engine, "mode c 90 sin");
    let shown = parse_number(engine.display_text());
    assert!((shown - 1.0).abs() < 1e-12);
}

#[test]
fn test_memory_survives_clear() {
    let mut engine = Engine::new();
    press_line(&mut engine, "5 m+ c mr");
    assert_eq!(engine.display_text(), "5");
}

#[test]
fn test_memory_register_in_arithmetic() {
    let mut engine = Engine::new();
    press_line(&mut engine, "8 m+ c 100 / mr =");
    assert_eq!(engine.display_text(), "12.5");
    press_line(&mut engine, "mc");
    assert_eq!(engine.memory(), 0.0);
}

#[test]
fn test_backspace_corrects_an_entry() {
    let mut engine = Engine::new();
    press_line(&mut engine, "129 bs 7 + 1 =");
    assert_eq!(engine.display_text(), "128");
}

#[test]
fn test_unknown_key_rejects_the_whole_line() {
    assert!(tokenize_keys("3 + bogus =").is_err());
}
