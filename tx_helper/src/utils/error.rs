use std::error::Error as StdError;
use std::fmt;

/// Tx Helper Result
pub type HelperResult<T> = Result<T, HelperError>;

/// Boxed error produced by the RPC client or the runtime.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Tx Helper Errors
///
/// `External` is the only variant that originates from a network round-trip.
/// Every other variant is local: retrying the request will not help.
#[derive(thiserror::Error, Debug)]
pub enum HelperError {
    /// Wrapper for errors returned by the RPC endpoint
    #[error(transparent)]
    External(#[from] ExternalError),
    /// The private key could not produce a public address
    #[error("key derivation: {0}")]
    KeyDerivation(String),
    /// Signing the transaction failed
    #[error("failed to sign transaction: {0}")]
    Signing(String),
    /// ABI pack/unpack issue
    #[error("abi: {0}")]
    Abi(String),
    /// Decoding issue
    #[error("decoding: {0}")]
    Decoding(String),
    /// Invalid helper configuration
    #[error("config: {0}")]
    Config(String),
    /// Neither a receipt nor a log list was handed to the log filter
    #[error("no input provided")]
    NoInput,
    /// Both a receipt and a log list were handed to the log filter
    #[error("receipt OR logs should be provided, but not both")]
    AmbiguousInput,
}

impl HelperError {
    /// Returns `true` if the error came back from the RPC endpoint.
    pub fn is_external(&self) -> bool {
        matches!(self, HelperError::External(_))
    }

    /// Returns `true` if the error is a confirmation wait that ran out of time.
    pub fn is_timeout(&self) -> bool {
        match self {
            HelperError::External(err) => err.is_timeout(),
            _ => false,
        }
    }

    /// Attaches free-text context to an external error.
    /// Local errors are left untouched.
    pub fn add_context<S: AsRef<str>>(&mut self, text: S) -> &mut Self {
        if let HelperError::External(err) = self {
            err.add_context(text);
        }
        self
    }
}

/// An error that originated from a network round-trip.
///
/// Keeps the original error as its `source` so it can be downcast by callers.
/// Prefer [`ExternalError::add_context`] over embedding this error into a new
/// message, otherwise the original error is lost.
#[derive(Debug)]
pub struct ExternalError {
    message: String,
    source: Option<BoxError>,
    additional_context: String,
    timeout: bool,
}

impl ExternalError {
    pub fn new<S: Into<String>>(message: S, source: Option<BoxError>) -> Self {
        Self {
            message: message.into(),
            source,
            additional_context: String::new(),
            timeout: false,
        }
    }

    /// External error raised when a transaction was not mined in time.
    pub fn timeout<S: Into<String>>(message: S, source: Option<BoxError>) -> Self {
        Self {
            timeout: true,
            ..Self::new(message, source)
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn additional_context(&self) -> &str {
        &self.additional_context
    }

    pub fn is_timeout(&self) -> bool {
        self.timeout
    }

    /// Appends text to the additional context.
    pub fn add_context<S: AsRef<str>>(&mut self, text: S) -> &mut Self {
        self.additional_context.push_str(text.as_ref());
        self
    }

    pub fn with_context<S: AsRef<str>>(mut self, text: S) -> Self {
        self.add_context(text);
        self
    }
}

impl fmt::Display for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx helper error: {}\nexternal error: ", self.message)?;
        match &self.source {
            Some(source) => write!(f, "{}", source)?,
            None => write!(f, "<none>")?,
        }
        if !self.additional_context.is_empty() {
            write!(f, "\nadditional context: {}", self.additional_context)?;
        }
        Ok(())
    }
}

impl StdError for ExternalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn StdError + 'static))
    }
}

/// Wraps an error returned by the RPC endpoint together with our own message.
pub fn external_err<E, S>(source: E, message: S) -> HelperError
where
    E: Into<BoxError>,
    S: Into<String>,
{
    HelperError::External(ExternalError::new(message, Some(source.into())))
}
