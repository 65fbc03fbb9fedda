use std::error;
use std::fmt;
use std::io;
use std::result;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Noop,
    NextMonth,
    PrevMonth,
    Today,
    Exit,
}

pub type CmdResult = result::Result<Cmd, CmdError>;

impl FromStr for Cmd {
    type Err = CmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noop" => Ok(Cmd::Noop),
            "next-month" => Ok(Cmd::NextMonth),
            "prev-month" => Ok(Cmd::PrevMonth),
            "today" => Ok(Cmd::Today),
            "exit" => Ok(Cmd::Exit),
            _ => Err(CmdError::new(format!("unknown command '{}'", s))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdError {
    message: Option<String>,
    kind: io::ErrorKind,
}

impl CmdError {
    pub fn new(message: String) -> Self {
        CmdError {
            message: Some(message),
            kind: io::ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for CmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:#?}",
            self.message
                .as_ref()
                .unwrap_or(&"Error executing command".to_owned()),
            self.kind
        )
    }
}

impl error::Error for CmdError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl From<CmdError> for io::Error {
    fn from(error: CmdError) -> Self {
        io::Error::from(error.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_parse() {
        assert_eq!("next-month".parse::<Cmd>().unwrap(), Cmd::NextMonth);
        assert_eq!("prev-month".parse::<Cmd>().unwrap(), Cmd::PrevMonth);
        assert_eq!("today".parse::<Cmd>().unwrap(), Cmd::Today);
        assert_eq!("exit".parse::<Cmd>().unwrap(), Cmd::Exit);
        assert!("sideways".parse::<Cmd>().is_err());
    }
}
