// tests/command_decoding.rs
use glam::IVec2;
use robot_grid::{Command, CommandInterpreter, Grid, InterpreterConfig, Orientation, Robot};
use symbios::{SymbiosState, SymbolTable};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

fn setup() -> (CommandInterpreter, Grid) {
    init_tracing();
    let interpreter = CommandInterpreter::default();
    let grid = interpreter.config().grid().unwrap();
    (interpreter, grid)
}

#[test]
fn test_default_session_grid() {
    let (_, grid) = setup();
    assert_eq!((grid.width(), grid.height()), (100, 100));
}

#[test]
fn test_decodes_canonical_and_legacy_names() {
    let (interpreter, _) = setup();
    let decoded = interpreter.decode_str("Advance,Left,Right,TurnLeft,TurnRight");
    assert_eq!(
        decoded.commands,
        vec![
            Command::Advance,
            Command::TurnLeft,
            Command::TurnRight,
            Command::TurnLeft,
            Command::TurnRight,
        ]
    );
    assert!(decoded.skipped.is_empty());
}

#[test]
fn test_unknown_tokens_are_dropped_in_order() {
    let (interpreter, _) = setup();
    let decoded = interpreter.decode_str("Advance,Jump,Left,advance,Advance");

    // Names are case-sensitive, so "advance" is dropped alongside "Jump".
    assert_eq!(
        decoded.commands,
        vec![Command::Advance, Command::TurnLeft, Command::Advance]
    );
    assert_eq!(decoded.skipped, vec!["Jump".to_string(), "advance".to_string()]);
}

#[test]
fn test_whitespace_and_empty_tokens() {
    let (interpreter, _) = setup();
    let decoded = interpreter.decode_str(" Advance , ,Right,");
    assert_eq!(decoded.commands, vec![Command::Advance, Command::TurnRight]);
    assert!(decoded.skipped.is_empty());

    assert!(interpreter.decode_str("").commands.is_empty());
}

#[test]
fn test_ordinals() {
    let (interpreter, _) = setup();
    let decoded = interpreter.decode_str("0,1,2,3,-4");
    assert_eq!(
        decoded.commands,
        vec![Command::Advance, Command::TurnLeft, Command::TurnRight]
    );
    assert_eq!(decoded.skipped, vec!["3".to_string(), "-4".to_string()]);

    let strict = CommandInterpreter::new(InterpreterConfig {
        accept_ordinals: false,
        ..Default::default()
    });
    let decoded = strict.decode_str("0,Advance");
    assert_eq!(decoded.commands, vec![Command::Advance]);
    assert_eq!(decoded.skipped, vec!["0".to_string()]);
}

#[test]
fn test_custom_separator() {
    let interpreter = CommandInterpreter::new(InterpreterConfig {
        separator: ';',
        ..Default::default()
    });
    let decoded = interpreter.decode_str("Advance;Left");
    assert_eq!(decoded.commands, vec![Command::Advance, Command::TurnLeft]);
}

#[test]
fn test_run_str_applies_surviving_commands() {
    let (interpreter, grid) = setup();
    let mut robot = Robot::new(1, Orientation::North);

    let report = interpreter.run_str(&mut robot, &grid, "Advance,Fly,Advance,Right,Advance");
    assert_eq!(report.len(), 4);
    assert_eq!(robot.position, IVec2::new(1, 2));
    assert_eq!(robot.orientation, Orientation::East);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: InterpreterConfig = serde_json::from_str(r#"{"grid_width": 10}"#).unwrap();
    assert_eq!(config.grid_width, 10);
    assert_eq!(config.grid_height, 100);
    assert_eq!(config.separator, ',');
    assert!(config.accept_ordinals);

    let bad = InterpreterConfig {
        grid_height: 0,
        ..Default::default()
    };
    assert!(bad.grid().is_err());
}

#[test]
fn test_symbol_stream_with_standard_symbols() {
    let (mut interpreter, grid) = setup();
    let mut interner = SymbolTable::new();
    interner.intern("F").unwrap();
    interner.intern("+").unwrap();
    interner.intern("-").unwrap();
    interner.intern("X").unwrap(); // never mapped
    interpreter.populate_standard_symbols(&interner);

    let f = interner.resolve_id("F").unwrap();
    let plus = interner.resolve_id("+").unwrap();
    let minus = interner.resolve_id("-").unwrap();
    let x = interner.resolve_id("X").unwrap();

    // F F - X F + F
    let mut state = SymbiosState::new();
    for sym in [f, f, minus, x, f, plus, f] {
        state.push(sym, 0.0, &[]).unwrap();
    }

    assert_eq!(
        interpreter.decode_state(&state),
        vec![
            Command::Advance,
            Command::Advance,
            Command::TurnRight,
            Command::Advance,
            Command::TurnLeft,
            Command::Advance,
        ]
    );

    let mut robot = Robot::new(3, Orientation::North);
    let report = interpreter.run_state(&mut robot, &grid, &state);
    assert_eq!(report.moves(), 4);
    assert_eq!(robot.position, IVec2::new(1, 3));
    assert_eq!(robot.orientation, Orientation::North);
}

#[test]
fn test_explicit_symbol_map() {
    let mut interner = SymbolTable::new();
    interner.intern("a").unwrap();
    interner.intern("b").unwrap();
    let a = interner.resolve_id("a").unwrap();
    let b = interner.resolve_id("b").unwrap();

    let mut map = vec![None; (a.max(b) as usize) + 1];
    map[a as usize] = Some(Command::TurnLeft);
    let interpreter = CommandInterpreter::default().with_map(map);

    let mut state = SymbiosState::new();
    state.push(a, 0.0, &[]).unwrap();
    state.push(b, 0.0, &[]).unwrap();
    state.push(a, 0.0, &[]).unwrap();

    let grid = Grid::new(5, 5).unwrap();
    let mut robot = Robot::new(1, Orientation::North);
    interpreter.run_state(&mut robot, &grid, &state);
    assert_eq!(robot.orientation, Orientation::South);
}
