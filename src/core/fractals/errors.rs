use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    ZeroMaxIterations,
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for AlgorithmError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFractalError {
    pub name: String,
}

impl fmt::Display for UnknownFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal selection: {:?}", self.name)
    }
}

impl Error for UnknownFractalError {}
