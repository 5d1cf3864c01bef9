use std::io::Write;

use crate::error::CommandResult;
use crate::translate::GreetingProvider;

pub const USAGE: &str = "Usage: greeter <language-code>";

/// Writes the usage line followed by the supported language table.
pub fn render<P, W>(provider: &P, out: &mut W) -> CommandResult<()>
where
    P: GreetingProvider + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{USAGE}")?;
    writeln!(out)?;
    writeln!(out, "Supported languages:")?;
    for language in provider.languages() {
        writeln!(out, "  {}  {}", language.code, language.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::BuiltinGreetings;

    #[test]
    fn lists_every_language() {
        let mut out = Vec::new();
        render(&BuiltinGreetings, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(USAGE));
        for language in BuiltinGreetings.languages() {
            assert!(text.contains(&format!("  {}  {}\n", language.code, language.name)));
        }
    }
}
