//! Boundary layer that turns external command representations into [`Command`]s.
//!
//! The entry point is [`CommandInterpreter`]. Two inputs are understood:
//!
//! * a separated token string such as `"Advance,Left,Advance"`, via
//!   [`CommandInterpreter::decode_str`] / [`CommandInterpreter::run_str`];
//! * a [`symbios::SymbiosState`] symbol stream, via
//!   [`CommandInterpreter::decode_state`] / [`CommandInterpreter::run_state`], once symbols
//!   are registered with [`CommandInterpreter::set_op`] or
//!   [`CommandInterpreter::populate_standard_symbols`].
//!
//! Anything that cannot be decoded is dropped; the remaining commands keep their
//! relative order.

use crate::grid::{Grid, GridError};
use crate::robot::{BatchReport, Command, Robot};
use serde::{Deserialize, Serialize};
use symbios::{SymbiosState, SymbolTable};
use tracing::{instrument, warn};

/// Configuration for a command session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Width of the session grid. Default: 100.
    pub grid_width: i32,
    /// Height of the session grid. Default: 100.
    pub grid_height: i32,
    /// Token separator for [`CommandInterpreter::decode_str`].
    pub separator: char,
    /// Accept `0`, `1`, `2` as Advance, TurnLeft, TurnRight.
    pub accept_ordinals: bool,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            grid_width: 100,
            grid_height: 100,
            separator: ',',
            accept_ordinals: true,
        }
    }
}

impl InterpreterConfig {
    /// Builds the session grid from the configured dimensions.
    pub fn grid(&self) -> Result<Grid, GridError> {
        Grid::new(self.grid_width, self.grid_height)
    }
}

/// Result of decoding a token string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedCommands {
    /// Successfully decoded commands, in input order.
    pub commands: Vec<Command>,
    /// Tokens that were dropped, in input order.
    pub skipped: Vec<String>,
}

/// Decodes external command input and feeds it to the motion engine.
pub struct CommandInterpreter {
    op_map: Vec<Option<Command>>,
    config: InterpreterConfig,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(InterpreterConfig::default())
    }
}

impl CommandInterpreter {
    /// Creates an interpreter with an empty symbol map.
    ///
    /// String decoding works immediately; symbol-stream decoding needs
    /// [`set_op`](Self::set_op) or [`populate_standard_symbols`](Self::populate_standard_symbols).
    pub fn new(config: InterpreterConfig) -> Self {
        Self {
            op_map: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Replaces the whole symbol map (builder pattern).
    ///
    /// `map` is indexed by symbol ID; IDs outside it, and `None` entries, are dropped.
    pub fn with_map(mut self, map: Vec<Option<Command>>) -> Self {
        self.op_map = map;
        self
    }

    /// Maps one symbol ID to a command, growing the map as needed.
    pub fn set_op(&mut self, sym_id: u16, command: Command) {
        let idx = sym_id as usize;
        if idx >= self.op_map.len() {
            self.op_map.resize(idx + 1, None);
        }
        self.op_map[idx] = Some(command);
    }

    /// Registers the conventional symbols present in `interner`:
    /// `F`/`A` advance, `+`/`L` turn left, `-`/`R` turn right.
    ///
    /// Symbols missing from the interner are skipped.
    pub fn populate_standard_symbols(&mut self, interner: &SymbolTable) {
        let mappings = [
            ("F", Command::Advance),
            ("A", Command::Advance),
            ("+", Command::TurnLeft),
            ("L", Command::TurnLeft),
            ("-", Command::TurnRight),
            ("R", Command::TurnRight),
        ];

        for (sym, command) in mappings {
            if let Some(id) = interner.resolve_id(sym) {
                self.set_op(id, command);
            }
        }
    }

    /// Decodes a single token. Surrounding whitespace is ignored; names are case-sensitive.
    pub fn decode_token(&self, token: &str) -> Option<Command> {
        let token = token.trim();
        if let Ok(command) = token.parse::<Command>() {
            return Some(command);
        }
        if self.config.accept_ordinals {
            return token.parse::<i64>().ok().and_then(Command::from_ordinal);
        }
        None
    }

    /// Splits `input` on the configured separator and decodes every token.
    ///
    /// Empty tokens (e.g. from `"Advance,,Left"` or a trailing separator) are ignored
    /// without being reported.
    #[instrument(skip(self))]
    pub fn decode_str(&self, input: &str) -> DecodedCommands {
        let mut decoded = DecodedCommands::default();
        for token in input.split(self.config.separator) {
            if token.trim().is_empty() {
                continue;
            }
            match self.decode_token(token) {
                Some(command) => decoded.commands.push(command),
                None => {
                    warn!(token, "dropping unrecognised command token");
                    decoded.skipped.push(token.to_string());
                }
            }
        }
        decoded
    }

    /// Decodes `input` and applies the result to `robot`.
    pub fn run_str(&self, robot: &mut Robot, grid: &Grid, input: &str) -> BatchReport {
        let decoded = self.decode_str(input);
        robot.apply_commands(decoded.commands, grid)
    }

    /// Maps every symbol in `state` through the symbol map, dropping unmapped ones.
    #[instrument(skip(self, state), fields(len = state.len()))]
    pub fn decode_state(&self, state: &SymbiosState) -> Vec<Command> {
        let mut commands = Vec::with_capacity(state.len());
        for i in 0..state.len() {
            let view = match state.get_view(i) {
                Some(v) => v,
                None => break,
            };

            match self.op_map.get(view.sym as usize).copied().flatten() {
                Some(command) => commands.push(command),
                None => warn!(sym = view.sym as usize, index = i, "dropping unmapped symbol"),
            }
        }
        commands
    }

    /// Decodes `state` and applies the result to `robot`.
    pub fn run_state(&self, robot: &mut Robot, grid: &Grid, state: &SymbiosState) -> BatchReport {
        let commands = self.decode_state(state);
        robot.apply_commands(commands, grid)
    }
}
