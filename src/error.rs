use thiserror::Error;

/// Errors that abort a comparison run. None of these are retried; in
/// non-interactive mode the first one ends the program with no chart written.
#[derive(Debug, Error)]
pub enum SgcError {
    /// Input was not a recognized Steam community profile URL or ID.
    #[error("URL format not valid/recognized: {0}")]
    MalformedUrl(String),

    /// HTTP request failed outright.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP error {0} for {1}")]
    Status(u16, String),

    /// Response body was not an HTML page.
    #[error("response was not an HTML page")]
    NotHtml,

    /// Profile exists but its games list is private.
    #[error("profile appears to be private")]
    PrivateProfile,

    /// Profile not found (neither public nor private) or not recognized.
    #[error("profile not found (neither public nor private) or not recognized")]
    MissingProfile,

    /// Could not locate the persona name in the profile page.
    #[error("could not retrieve player's name")]
    PersonaName,

    /// Could not locate or parse the games array in the profile page.
    #[error("could not retrieve player's games")]
    GamesList,

    /// Config file missing, unreadable, or malformed.
    #[error("config error: {0}")]
    Config(String),
}
