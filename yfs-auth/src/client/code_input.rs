use std::io::{self, Write};

use crate::error::AuthError;

/// Source of the manually pasted authorization code.
///
/// The out-of-band redirect means no callback listener exists: Yahoo shows
/// the code to the user after consent and the flow blocks until it is handed
/// back. Implementations may block indefinitely.
pub trait AuthCodeInput {
    /// Present the authorization URL to the operator and return the code
    /// displayed after consent.
    fn read_code(&mut self, auth_url: &str) -> Result<String, AuthError>;
}

/// Interactive prompt: opens the browser when possible, always prints the
/// URL, then reads one line from stdin.
pub struct StdinCode;

impl StdinCode {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinCode {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthCodeInput for StdinCode {
    fn read_code(&mut self, auth_url: &str) -> Result<String, AuthError> {
        if open::that(auth_url).is_ok() {
            println!("Browser opened. You can also visit the URL directly:");
        } else {
            println!("Please visit this URL to authorize the application:");
        }
        println!("{}\n", auth_url);

        print!("Enter the authorization code: ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
