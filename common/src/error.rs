use std::{error::Error, fmt::Display};

/// This type gets used to be our catch all error.
/// We implement conversions for all library errors to ease error management.
#[derive(Debug)]
pub enum RtError {
    /// Allows a generic error message.
    StringRtError(String),
    /// Anticipated errors, may be rethrown with an additional error message.
    RethrowRtError(String, Box<dyn Error>),
    /// All other library errors get converted to this error.
    OtherRtError(Box<dyn Error>),
}

/// This type is our goto Result, as it allows us to convert between many different errors.
pub type RtResult<O> = Result<O, RtError>;

impl Display for RtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RtError::StringRtError(str) => str.fmt(f),
            RtError::RethrowRtError(str, err) => {
                str.fmt(f)?;
                " with: ".fmt(f)?;
                err.fmt(f)?;
                Ok(())
            }
            RtError::OtherRtError(err) => err.fmt(f),
        }
    }
}
impl Error for RtError {}

impl RtError {
    /// Allows to annotate a RtError to better detect the origin of errors.
    /// # Usage
    /// ```
    /// # use common::{RtError, RtResult};
    /// # fn fallible_function() -> RtResult<()> {
    /// # Err(RtError::StringRtError("".into()))
    /// # }
    /// # fn container_function() -> RtResult<()> {
    /// fallible_function().map_err(RtError::rethrow_with("function failed"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn rethrow_with(str: &'static str) -> impl Fn(RtError) -> RtError {
        move |err| RtError::RethrowRtError(str.to_string(), Box::new(err))
    }
}

macro_rules! implement_from {
    ($type:ty) => {
        impl From<$type> for RtError {
            fn from(other: $type) -> Self {
                RtError::OtherRtError(Box::from(other))
            }
        }
    };
}
implement_from!(std::io::Error);
implement_from!(csv::Error);
implement_from!(serde_json::Error);
implement_from!(std::num::ParseIntError);

impl<'a> From<&'a str> for RtError {
    fn from(other: &'a str) -> Self {
        RtError::StringRtError(other.to_string())
    }
}
impl From<String> for RtError {
    fn from(other: String) -> Self {
        RtError::StringRtError(other)
    }
}
