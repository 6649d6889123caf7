use antmaze_colony::ColonyError;
use antmaze_io::FileError;
use std::process::ExitCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] FileError),

    #[error(transparent)]
    Colony(#[from] ColonyError),

    #[error("cannot install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("cannot start presentation loop: {0}")]
    Presentation(#[source] std::io::Error),

    #[error("cannot write route: {0}")]
    Output(#[source] std::io::Error),

    #[error("no route found after {iterations} iterations")]
    NoRoute { iterations: usize },
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::NoRoute { .. } => ExitCode::from(1),
            Self::Input(_) => ExitCode::from(3),
            Self::Colony(_) => ExitCode::from(4),
            Self::Signal(_) | Self::Presentation(_) => ExitCode::from(5),
            Self::Output(_) => ExitCode::from(6),
        }
    }
}
