use std::result;
use std::fmt::{self, Display};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Syntactic { messages: Vec<String> },
    Io(std::io::Error),
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub fn syntactic(messages: Vec<String>) -> Error {
        Error { kind: ErrorKind::Syntactic { messages } }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The parser diagnostics carried by a syntax error, if this is one.
    pub fn messages(&self) -> &[String] {
        match self.kind() {
            ErrorKind::Syntactic { messages } => messages,
            ErrorKind::Io(_) => &[],
        }
    }

    pub fn is_syntactic(&self) -> bool {
        matches!(self.kind(), ErrorKind::Syntactic { .. })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(e) => Some(e),
            ErrorKind::Syntactic { .. } => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        match self.kind() {
            Syntactic { messages } => {
                write!(f, "parser errors:")?;
                for message in messages.iter() {
                    write!(f, "\n\t{}", message)?;
                }
                Ok(())
            },
            Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        match e.kind {
            ErrorKind::Io(io) => io,
            kind => std::io::Error::new(Other, Error { kind }),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error { kind: ErrorKind::Io(e) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_list_every_message() {
        let e = Error::syntactic(vec!["first".into(), "second".into()]);
        assert_eq!("parser errors:\n\tfirst\n\tsecond", e.to_string());
        assert!(e.is_syntactic());
        assert_eq!(2, e.messages().len());
    }

    #[test]
    fn io_errors_round_trip() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.mk");
        let e = Error::from(io);
        assert!(!e.is_syntactic());
        assert!(e.messages().is_empty());

        let back: std::io::Error = e.into();
        assert_eq!(std::io::ErrorKind::NotFound, back.kind());
    }
}
