use std::{
    error::Error,
    fmt::Display,
    io::{Error as IoError, ErrorKind},
};

#[derive(Debug)]
pub enum PrioError {
    BadValue(String, usize, String),
    FileError(String, Box<dyn Error + Send + Sync + 'static>),
    ZeroTopK,
}

impl Display for PrioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrioError::BadValue(filename, line, text) => {
                write!(
                    f,
                    "Bad value at {}:{} - expected a number, got '{}'",
                    filename, line, text
                )
            }
            PrioError::FileError(filename, error) => {
                write!(
                    f,
                    "With file '{}' the following error occurred: {}",
                    filename,
                    error.as_ref().to_string()
                )
            }
            PrioError::ZeroTopK => {
                write!(f, "The number of values to keep must be at least 1")
            }
        }
    }
}

impl std::error::Error for PrioError {}

pub fn as_io_error(error: PrioError) -> std::io::Error {
    IoError::new(ErrorKind::Other, error)
}

pub fn wrap_file_error<E: std::error::Error + Send + Sync + 'static>(
    e: E,
    filename: &str,
) -> std::io::Error {
    log::error!("error in {}: {:?}", filename, e);
    as_io_error(PrioError::FileError(String::from(filename), Box::new(e)))
}
