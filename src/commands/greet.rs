use std::io::Write;

use crate::error::CommandResult;
use crate::translate::GreetingProvider;

/// Writes the greeting for `code` as a single line.
pub fn run<P, W>(code: &str, provider: &P, out: &mut W) -> CommandResult<()>
where
    P: GreetingProvider + ?Sized,
    W: Write + ?Sized,
{
    let greeting = provider.say_hello(code).inspect_err(|error| {
        tracing::warn!(code, %error, "greeting lookup failed");
    })?;
    tracing::debug!(code, %greeting, "resolved greeting");

    writeln!(out, "{greeting}")?;
    Ok(())
}
