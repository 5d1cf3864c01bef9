pub mod greet;
pub mod usage;

use std::io::Write;

use crate::cli::Args;
use crate::error::CommandResult;
use crate::translate::GreetingProvider;

/// What a successful invocation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Greeted,
    ShowedUsage,
}

/// Dispatches on argument count: one code greets, anything else shows usage.
pub fn execute<P, W>(args: &Args, provider: &P, out: &mut W) -> CommandResult<Outcome>
where
    P: GreetingProvider + ?Sized,
    W: Write + ?Sized,
{
    match args.language() {
        Some(code) => {
            greet::run(code, provider, out)?;
            Ok(Outcome::Greeted)
        }
        None => {
            tracing::debug!(count = args.codes.len(), "expected exactly one language code");
            usage::render(provider, out)?;
            Ok(Outcome::ShowedUsage)
        }
    }
}
