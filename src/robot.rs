//! Robot state and the motion engine that drives it.

use crate::grid::Grid;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::{debug, instrument};

/// Opaque key assigned by whatever stores robot records. The engine never inspects it.
pub type RobotId = u32;

/// Compass heading of a robot.
///
/// There is intentionally no `Default`: every robot is built with an explicit heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// 90° counter-clockwise: North -> West -> South -> East -> North.
    pub fn turned_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Exact inverse of [`turned_left`](Self::turned_left).
    pub fn turned_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit vector of travel for [`Command::Advance`].
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::South => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::West => IVec2::NEG_X,
        }
    }
}

/// Atomic instruction applied to a robot.
///
/// Parsing accepts the canonical names as well as the short `Left` / `Right`
/// spellings of the legacy command API. Matching is case-sensitive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Command {
    /// Step one unit in the current heading, if the grid allows it.
    Advance,
    #[strum(to_string = "TurnLeft", serialize = "Left")]
    TurnLeft,
    #[strum(to_string = "TurnRight", serialize = "Right")]
    TurnRight,
}

impl Command {
    /// Decodes the numeric form used by the legacy API (`0` Advance, `1` Left, `2` Right).
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Advance),
            1 => Some(Self::TurnLeft),
            2 => Some(Self::TurnRight),
            _ => None,
        }
    }
}

/// What a single command did to the robot.
///
/// Purely informational: a blocked move is not a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Moved { from: IVec2, to: IVec2 },
    /// Advance was discarded because it would leave the grid.
    Blocked { at: IVec2 },
    Turned { from: Orientation, to: Orientation },
}

impl CommandOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Per-command outcomes of one batch, in application order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<CommandOutcome>,
}

impl BatchReport {
    /// Number of commands applied.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of advances that actually changed the position.
    pub fn moves(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CommandOutcome::Moved { .. }))
            .count()
    }

    /// Number of advances discarded at the boundary.
    pub fn blocked(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_blocked()).count()
    }
}

/// A robot record: identity, grid position and heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub id: RobotId,
    pub position: IVec2,
    pub orientation: Orientation,
}

impl Robot {
    /// Creates a robot at the origin facing `orientation`.
    pub fn new(id: RobotId, orientation: Orientation) -> Self {
        Self::at(id, IVec2::ZERO, orientation)
    }

    /// Rehydrates a stored record as-is.
    pub fn at(id: RobotId, position: IVec2, orientation: Orientation) -> Self {
        Self {
            id,
            position,
            orientation,
        }
    }

    /// Position one step ahead, or `None` if the step overflows `i32`.
    fn candidate(&self) -> Option<IVec2> {
        let step = self.orientation.step();
        Some(IVec2::new(
            self.position.x.checked_add(step.x)?,
            self.position.y.checked_add(step.y)?,
        ))
    }

    /// Whether advancing from the current state stays inside `grid`.
    ///
    /// Only the axis of travel is checked. Upper bounds are inclusive
    /// (`y + 1 <= height`, `x + 1 <= width`), lower bounds are `>= 0`.
    pub fn is_valid_move(&self, grid: &Grid) -> bool {
        let Some(next) = self.candidate() else {
            return false;
        };
        match self.orientation {
            Orientation::North => next.y <= grid.height(),
            Orientation::South => next.y >= 0,
            Orientation::East => next.x <= grid.width(),
            Orientation::West => next.x >= 0,
        }
    }

    /// Applies one command in place.
    ///
    /// Never fails: an advance that would leave the grid is discarded and reported as
    /// [`CommandOutcome::Blocked`] with the robot untouched.
    #[instrument(level = "trace", skip(self, grid), fields(id = self.id))]
    pub fn apply_command(&mut self, command: Command, grid: &Grid) -> CommandOutcome {
        match command {
            Command::Advance => match self.candidate() {
                Some(next) if self.is_valid_move(grid) => {
                    let from = self.position;
                    self.position = next;
                    CommandOutcome::Moved { from, to: next }
                }
                _ => {
                    debug!(
                        x = self.position.x,
                        y = self.position.y,
                        orientation = %self.orientation,
                        "advance blocked by grid boundary"
                    );
                    CommandOutcome::Blocked { at: self.position }
                }
            },
            Command::TurnLeft => self.turn(self.orientation.turned_left()),
            Command::TurnRight => self.turn(self.orientation.turned_right()),
        }
    }

    fn turn(&mut self, to: Orientation) -> CommandOutcome {
        let from = self.orientation;
        self.orientation = to;
        CommandOutcome::Turned { from, to }
    }

    /// Applies `commands` strictly in order; each one sees the effect of all before it.
    ///
    /// The `&mut` borrow is held for the whole batch, so no other writer can touch
    /// this robot until it returns.
    #[instrument(skip(self, commands, grid), fields(id = self.id))]
    pub fn apply_commands<I>(&mut self, commands: I, grid: &Grid) -> BatchReport
    where
        I: IntoIterator<Item = Command>,
    {
        let outcomes: Vec<_> = commands
            .into_iter()
            .map(|command| self.apply_command(command, grid))
            .collect();
        let report = BatchReport { outcomes };

        debug!(
            applied = report.len(),
            moves = report.moves(),
            blocked = report.blocked(),
            x = self.position.x,
            y = self.position.y,
            orientation = %self.orientation,
            "batch applied"
        );
        report
    }
}
