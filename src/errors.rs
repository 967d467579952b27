use thiserror::Error;

/// Main error type for the Pokédex battle core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleEngineError {
    /// The chosen move is not one of the active combatant's moves
    #[error("{pokemon} does not know the move '{move_name}'")]
    InvalidMove { pokemon: String, move_name: String },

    /// A move was submitted after the battle reached its terminal state
    #[error("The battle is already finished")]
    BattleFinished,

    /// A calculation input outside its domain (e.g. a defense stat of 0)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Battle state is in an inconsistent or corrupted state
    #[error("Inconsistent battle state: {0}")]
    InconsistentState(String),

    /// A team was built with no members
    #[error("A team needs at least one combatant")]
    EmptyTeam,

    /// A combatant was built with no moves
    #[error("{0} has no usable moves")]
    NoMoves(String),

    /// No roster entry exists for the requested Pokédex id
    #[error("Species not found: #{0}")]
    UnknownSpecies(u32),

    /// No gym leader exists with the requested id
    #[error("Gym leader not found: {0}")]
    UnknownPersona(String),

    /// Embedded roster data could not be parsed
    #[error("Malformed roster data: {0}")]
    RosterData(String),

    /// A configuration file could not be read or parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;
