// ============================================================================
// Identifier Case Conversion
// ============================================================================

//! Identifier case conversion and name patterns.
//!
//! `_`, `-` and space are interchangeable word boundaries. Conversions into
//! camelCase/PascalCase only look at those explicit separators; conversions
//! into snake_case/kebab-case also split in front of uppercase letters.
//!
//! | Input | camel | Pascal | snake | kebab |
//! |-------|-------|--------|-------|-------|
//! | `hello_world` | `helloWorld` | `HelloWorld` | `hello_world` | `hello-world` |
//! | `HelloWorld` | `helloWorld` | `HelloWorld` | `hello_world` | `hello-world` |
//! | `user service` | `userService` | `UserService` | `user_service` | `user-service` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainResult,
    template::{self, Bindings},
};

/// Supported identifier conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingCase {
    Camel,
    Pascal,
    Snake,
    Kebab,
    ScreamingSnake,
}

impl NamingCase {
    pub const ALL: [NamingCase; 5] = [
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::Kebab,
        Self::ScreamingSnake,
    ];

    /// Convert `input` into this case.
    pub fn apply(self, input: &str) -> String {
        match self {
            Self::Camel => to_camel_case(input),
            Self::Pascal => to_pascal_case(input),
            Self::Snake => to_snake_case(input),
            Self::Kebab => to_kebab_case(input),
            Self::ScreamingSnake => to_screaming_snake_case(input),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::ScreamingSnake => "screaming-snake",
        }
    }
}

impl fmt::Display for NamingCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|case| case.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown naming case '{s}'"))
    }
}

fn is_boundary(c: char) -> bool {
    matches!(c, '_' | '-' | ' ')
}

/// Convert to camelCase.
///
/// Separators are removed and the character after one is upper-cased. The
/// first character is lower-cased; every other character keeps its case, so
/// `HelloWorld` becomes `helloWorld`.
pub fn to_camel_case(input: &str) -> String {
    capitalize_words(input, false)
}

/// Convert to PascalCase. Same as [`to_camel_case`] with an upper-cased
/// first character.
pub fn to_pascal_case(input: &str) -> String {
    capitalize_words(input, true)
}

fn capitalize_words(input: &str, upper_first: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = upper_first;

    for c in input.chars() {
        if is_boundary(c) {
            capitalize_next = true;
            continue;
        }

        if out.is_empty() {
            if upper_first {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
        } else if capitalize_next {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        capitalize_next = false;
    }

    out
}

/// Convert to snake_case.
///
/// ## Examples
///
/// | Input | Output |
/// |-------|--------|
/// | "helloWorld" | "hello_world" |
/// | "HelloWorld" | "hello_world" |
/// | "hello-world" | "hello_world" |
/// | "a__b" | "a_b" |
pub fn to_snake_case(input: &str) -> String {
    separate_words(input, '_')
}

/// Convert to kebab-case. Mirror of [`to_snake_case`] using `-`.
pub fn to_kebab_case(input: &str) -> String {
    separate_words(input, '-')
}

/// Convert to SCREAMING_SNAKE_CASE by upper-casing [`to_snake_case`].
pub fn to_screaming_snake_case(input: &str) -> String {
    to_snake_case(input).to_uppercase()
}

fn separate_words(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len() + 4);

    for c in input.chars() {
        if is_boundary(c) {
            if !out.ends_with(separator) {
                out.push(separator);
            }
            continue;
        }

        if c.is_uppercase() {
            if !out.is_empty() && !out.ends_with(separator) {
                out.push(separator);
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Render `pattern` with `raw_name` converted to `case`.
///
/// The converted name is bound under both `Name` and `name`.
///
/// ```rust
/// use digen_core::domain::{NamingCase, parameterize_name};
///
/// let file = parameterize_name("register{Name}.ts", "service_a", NamingCase::Pascal).unwrap();
/// assert_eq!(file, "registerServiceA.ts");
/// ```
pub fn parameterize_name(pattern: &str, raw_name: &str, case: NamingCase) -> DomainResult<String> {
    let converted = case.apply(raw_name);
    let bindings = Bindings::new()
        .with("Name", converted.clone())
        .with("name", converted);

    let parts = template::parse(pattern)?;
    template::render(&parts, &bindings)
}

/// Join name fragments with `separator`.
pub fn concat_names<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    template::join(separator, parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn camel_case_conversions() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case("hello world"), "helloWorld");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("userService"), "userService");
    }

    #[test]
    fn camel_case_keeps_internal_caps() {
        assert_eq!(to_camel_case("HTTP_server"), "hTTPServer");
    }

    #[test]
    fn pascal_case_conversions() {
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("userService"), "UserService");
        assert_eq!(to_pascal_case("service_a"), "ServiceA");
        assert_eq!(to_pascal_case("_leading"), "Leading");
    }

    #[test]
    fn snake_case_conversions() {
        assert_eq!(to_snake_case("helloWorld"), "hello_world");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("hello world"), "hello_world");
        assert_eq!(to_snake_case("user2Service"), "user2_service");
    }

    #[test]
    fn snake_case_never_doubles_separator() {
        assert_eq!(to_snake_case("a__b"), "a_b");
        assert_eq!(to_snake_case("a_-b"), "a_b");
        assert_eq!(to_snake_case("hello_World"), "hello_world");
    }

    #[test]
    fn snake_case_splits_every_uppercase() {
        assert_eq!(to_snake_case("HTTPServer"), "h_t_t_p_server");
    }

    #[test]
    fn kebab_case_conversions() {
        assert_eq!(to_kebab_case("helloWorld"), "hello-world");
        assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
        assert_eq!(to_kebab_case("hello_world"), "hello-world");
        assert_eq!(to_kebab_case("hello--World"), "hello-world");
    }

    #[test]
    fn screaming_snake_derives_from_snake() {
        assert_eq!(to_screaming_snake_case("helloWorld"), "HELLO_WORLD");
        assert_eq!(
            to_screaming_snake_case("user-service"),
            to_snake_case("user-service").to_uppercase()
        );
    }

    #[test]
    fn empty_input_stays_empty() {
        for case in NamingCase::ALL {
            assert_eq!(case.apply(""), "", "{case}");
        }
    }

    #[test]
    fn naming_case_parses_from_display() {
        for case in NamingCase::ALL {
            assert_eq!(case.to_string().parse::<NamingCase>(), Ok(case));
        }
        assert!("title".parse::<NamingCase>().is_err());
    }

    #[test]
    fn parameterize_pascal_pattern() {
        assert_eq!(
            parameterize_name("register{Name}", "service_a", NamingCase::Pascal).unwrap(),
            "registerServiceA"
        );
    }

    #[test]
    fn parameterize_binds_lowercase_alias() {
        assert_eq!(
            parameterize_name("{name}.ts", "UserService", NamingCase::Kebab).unwrap(),
            "user-service.ts"
        );
    }

    #[test]
    fn parameterize_rejects_unknown_parameter() {
        assert_eq!(
            parameterize_name("{Other}", "x", NamingCase::Camel),
            Err(DomainError::MissingParameter {
                name: "Other".into()
            })
        );
    }

    #[test]
    fn concat_names_cases() {
        assert_eq!(concat_names(&["a", "b", "c"], ", "), "a, b, c");
        assert_eq!(concat_names::<&str>(&[], ", "), "");
        assert_eq!(concat_names(&["single"], ", "), "single");
    }
}
