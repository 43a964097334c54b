#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("radix {radix} out of range [2, 36]")]
    InvalidRadix { radix: i32 },

    #[error("malformed number \"{input}\": {reason}")]
    MalformedNumber { input: String, reason: &'static str },

    #[error("value \"{input}\" out of range for radix {radix}")]
    OutOfRange { input: String, radix: i32 },

    #[error("division by zero")]
    DivideByZero,
}

impl NumberError {
    /// The offending input text, when the error carries one.
    pub fn input(&self) -> Option<&str> {
        match self {
            NumberError::MalformedNumber { input, .. } | NumberError::OutOfRange { input, .. } => Some(input),
            _ => None,
        }
    }
}

impl From<NumberError> for std::io::Error {
    fn from(err: NumberError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    }
}

// Builds a MalformedNumber for `$input` with a static reason. A macro keeps
// the `to_string()` at the failure site and out of the success path.
#[macro_export]
macro_rules! malformed {
    ($input:expr, $reason:expr) => {
        $crate::NumberError::MalformedNumber {
            input: $input.to_string(),
            reason: $reason,
        }
    };
}

#[macro_export]
macro_rules! out_of_range {
    ($input:expr, $radix:expr) => {
        $crate::NumberError::OutOfRange {
            input: $input.to_string(),
            radix: $radix,
        }
    };
}
