use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrilaterationError {
    #[error("Guess coincides with station {station_index}; the residual Jacobian is undefined")]
    DegenerateGeometry { station_index: usize },

    #[error(
        "Normal matrix JᵀJ is singular (cannot be solved); need at least 3 ranges with independent directions"
    )]
    SingularSystem,

    #[error("Invalid solver parameter: {0}")]
    InvalidSolverParameter(String),

    #[error("Invalid random sampling range: {0}")]
    InvalidRandomRange(String),

    #[error("No usable solution found after {attempts} attempts")]
    NoSolutionFound { attempts: usize },
}
