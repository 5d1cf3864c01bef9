use crate::error::{CommandResult, GreeterError};

/// One row of the language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub hello: &'static str,
}

/// Capability that renders "hello" in a given language.
pub trait GreetingProvider {
    /// Returns the greeting for `code`, failing when the code is unknown.
    fn say_hello(&self, code: &str) -> CommandResult<String>;

    /// Every supported language, sorted by code.
    fn languages(&self) -> &[Language];
}

/// Provider backed by the built-in, immutable language table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGreetings;

impl GreetingProvider for BuiltinGreetings {
    fn say_hello(&self, code: &str) -> CommandResult<String> {
        let wanted = code.trim();
        LANGUAGES
            .iter()
            .find(|language| language.code.eq_ignore_ascii_case(wanted))
            .map(|language| language.hello.to_string())
            .ok_or_else(|| GreeterError::UnsupportedLanguage {
                code: code.to_string(),
            })
    }

    fn languages(&self) -> &[Language] {
        LANGUAGES
    }
}

macro_rules! languages {
    ($(($code:literal, $name:literal, $hello:literal)),* $(,)?) => {
        &[$(Language { code: $code, name: $name, hello: $hello }),*]
    };
}

// Keep sorted by code.
static LANGUAGES: &[Language] = languages![
    ("ar", "Arabic", "مرحبا"),
    ("cs", "Czech", "Ahoj"),
    ("da", "Danish", "Hej"),
    ("de", "German", "Hallo"),
    ("el", "Greek", "Γειά σου"),
    ("en", "English", "Hello"),
    ("es", "Spanish", "Hola"),
    ("fi", "Finnish", "Hei"),
    ("fr", "French", "Bonjour"),
    ("he", "Hebrew", "שלום"),
    ("hi", "Hindi", "नमस्ते"),
    ("hu", "Hungarian", "Szia"),
    ("id", "Indonesian", "Halo"),
    ("it", "Italian", "Ciao"),
    ("ja", "Japanese", "こんにちは"),
    ("ko", "Korean", "안녕하세요"),
    ("nl", "Dutch", "Hallo"),
    ("no", "Norwegian", "Hei"),
    ("pl", "Polish", "Cześć"),
    ("pt", "Portuguese", "Olá"),
    ("ro", "Romanian", "Salut"),
    ("ru", "Russian", "Привет"),
    ("sv", "Swedish", "Hej"),
    ("sw", "Swahili", "Habari"),
    ("tr", "Turkish", "Merhaba"),
    ("uk", "Ukrainian", "Привіт"),
    ("vi", "Vietnamese", "Xin chào"),
    ("zh", "Chinese", "你好"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_in_spanish() {
        assert_eq!(BuiltinGreetings.say_hello("es").unwrap(), "Hola");
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(BuiltinGreetings.say_hello("IT").unwrap(), "Ciao");
        assert_eq!(BuiltinGreetings.say_hello(" it ").unwrap(), "Ciao");
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = BuiltinGreetings.say_hello("xx").unwrap_err();
        assert!(matches!(
            err,
            GreeterError::UnsupportedLanguage { ref code } if code == "xx"
        ));
        assert_eq!(err.to_string(), "unsupported language code `xx`");
    }

    #[test]
    fn empty_code_is_rejected() {
        assert!(BuiltinGreetings.say_hello("").is_err());
    }

    #[test]
    fn table_is_sorted_without_duplicates() {
        let codes: Vec<_> = BuiltinGreetings
            .languages()
            .iter()
            .map(|language| language.code)
            .collect();
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn codes_are_two_lowercase_letters() {
        for language in BuiltinGreetings.languages() {
            assert_eq!(language.code.len(), 2, "{language:?}");
            assert!(language.code.bytes().all(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn every_listed_language_can_be_greeted() {
        for language in BuiltinGreetings.languages() {
            assert_eq!(
                BuiltinGreetings.say_hello(language.code).unwrap(),
                language.hello
            );
        }
    }
}
