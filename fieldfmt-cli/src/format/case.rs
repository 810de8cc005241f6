//! Case transforms applied to display text

/// Built-in display transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    Uppercase,
    Lowercase,
    UpperFirst,
    LowerFirst,
    StartCase,
    KebabCase,
    SnakeCase,
    CamelCase,
}

impl CaseTransform {
    /// Look up a transform by its case-insensitive name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "uppercase" => Some(CaseTransform::Uppercase),
            "lowercase" => Some(CaseTransform::Lowercase),
            "upperfirst" => Some(CaseTransform::UpperFirst),
            "lowerfirst" => Some(CaseTransform::LowerFirst),
            "startcase" => Some(CaseTransform::StartCase),
            "kebabcase" => Some(CaseTransform::KebabCase),
            "snakecase" => Some(CaseTransform::SnakeCase),
            "camelcase" => Some(CaseTransform::CamelCase),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaseTransform::Uppercase => "uppercase",
            CaseTransform::Lowercase => "lowercase",
            CaseTransform::UpperFirst => "upperfirst",
            CaseTransform::LowerFirst => "lowerfirst",
            CaseTransform::StartCase => "startcase",
            CaseTransform::KebabCase => "kebabcase",
            CaseTransform::SnakeCase => "snakecase",
            CaseTransform::CamelCase => "camelcase",
        }
    }

    pub fn apply(&self, s: &str) -> String {
        match self {
            CaseTransform::Uppercase => s.to_uppercase(),
            CaseTransform::Lowercase => s.to_lowercase(),
            CaseTransform::UpperFirst => upper_first(s),
            CaseTransform::LowerFirst => lower_first(s),
            CaseTransform::StartCase => start_case(s),
            CaseTransform::KebabCase => kebab_case(s),
            CaseTransform::SnakeCase => snake_case(s),
            CaseTransform::CamelCase => camel_case(s),
        }
    }
}

impl std::fmt::Display for CaseTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first character, lower-case the rest
fn capitalize(s: &str) -> String {
    upper_first(&s.to_lowercase())
}

pub fn start_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|w| upper_first(w))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn kebab_case(s: &str) -> String {
    join_lower(s, "-")
}

pub fn snake_case(s: &str) -> String {
    join_lower(s, "_")
}

pub fn camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

fn join_lower(s: &str, separator: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Separator,
}

fn classify(c: char) -> CharClass {
    if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphanumeric() {
        // Lower-case letters and letters without case
        CharClass::Lower
    } else {
        CharClass::Separator
    }
}

/// Split text into words
///
/// Breaks on non-alphanumeric characters, before an upper-case letter that
/// follows a lower-case one (`fooBar`), at the end of an acronym (`XMLHttp`)
/// and between letters and digits (`version2`). Apostrophes are dropped.
pub fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().filter(|c| *c != '\'' && *c != '\u{2019}').collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev = CharClass::Separator;

    for (i, &c) in chars.iter().enumerate() {
        let class = classify(c);
        let next = chars.get(i + 1).map(|&n| classify(n));

        let boundary = match (prev, class) {
            (_, CharClass::Separator) => true,
            (CharClass::Lower, CharClass::Upper) => true,
            (CharClass::Upper, CharClass::Upper) => next == Some(CharClass::Lower),
            (CharClass::Digit, CharClass::Upper | CharClass::Lower) => true,
            (CharClass::Upper | CharClass::Lower, CharClass::Digit) => true,
            _ => false,
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        if class != CharClass::Separator {
            current.push(c);
        }
        prev = class;
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(CaseTransform::from_name("KebabCase"), Some(CaseTransform::KebabCase));
        assert_eq!(CaseTransform::from_name(" upperFirst "), Some(CaseTransform::UpperFirst));
        assert_eq!(CaseTransform::from_name("bogus"), None);
    }

    #[test]
    fn test_words() {
        assert_eq!(words("Hello World"), vec!["Hello", "World"]);
        assert_eq!(words("XMLHttpRequest"), vec!["XML", "Http", "Request"]);
        assert_eq!(words("fooBar_baz-qux"), vec!["foo", "Bar", "baz", "qux"]);
        assert_eq!(words("version2update"), vec!["version", "2", "update"]);
        assert_eq!(words("don't stop"), vec!["dont", "stop"]);
        assert!(words("  --  ").is_empty());
    }

    #[test]
    fn test_first_letter() {
        assert_eq!(upper_first("élan vital"), "Élan vital");
        assert_eq!(lower_first("ABC"), "aBC");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_compound_cases() {
        assert_eq!(kebab_case("fooBar"), "foo-bar");
        assert_eq!(kebab_case("HELLO WORLD"), "hello-world");
        assert_eq!(snake_case("Foo Bar"), "foo_bar");
        assert_eq!(camel_case("foo-bar_baz"), "fooBarBaz");
        assert_eq!(camel_case("HELLO WORLD"), "helloWorld");
        assert_eq!(start_case("foo_bar"), "Foo Bar");
        assert_eq!(start_case("fooBar"), "Foo Bar");
        assert_eq!(start_case("HELLO WORLD"), "HELLO WORLD");
    }

    #[test]
    fn test_apply() {
        assert_eq!(CaseTransform::Uppercase.apply("hello"), "HELLO");
        assert_eq!(CaseTransform::Lowercase.apply("HeLLo"), "hello");
        assert_eq!(CaseTransform::KebabCase.apply("version2update"), "version-2-update");
    }
}
