use std::fmt;

#[derive(Debug)]
pub enum ReaderError {
    NoConfigFile(String),
    General(String),
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoConfigFile(msg) => write!(f, "config file not found: {msg}"),
            Self::General(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ReaderError {}
