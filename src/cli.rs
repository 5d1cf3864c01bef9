use clap::Parser;

/// Command-line arguments for the greeter CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "greeter",
    version,
    about = "Prints \"hello\" translated into the requested language.",
    long_about = None
)]
pub struct Args {
    /// ISO 639-1 code of the target language (e.g. "it", "es").
    #[arg(value_name = "LANGUAGE-CODE")]
    pub codes: Vec<String>,
}

impl Args {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// The target language code, present only when exactly one was given.
    pub fn language(&self) -> Option<&str> {
        match self.codes.as_slice() {
            [code] => Some(code.as_str()),
            _ => None,
        }
    }
}
