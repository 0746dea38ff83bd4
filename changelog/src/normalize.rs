//! Presentation clean-up applied to every commit subject before it is
//! classified.
//!
//! Rules run in a fixed order and the output is a fixed point: feeding a
//! normalized line back through [`normalize`] returns it unchanged.

use crate::utils::{
    ARM_PATTERN, CODE_SPAN_PATTERN, CONTRACTION_PATTERN, DOUBLED_BACKTICK_PATTERN,
    MENTION_PATTERN, PROPER_NOUNS, SYMBOL_PATTERN, VISUAL_STUDIO_PATTERN,
};
use regex::Captures;

/// Normalizes a raw commit subject.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let text = wrap_symbols(raw);
    let text = outside_code_spans(&text, expand_shorthand);
    let text = fix_contractions(&text);
    strip_mentions(&text)
}

/// Wraps code-looking tokens in backticks, skipping existing code spans.
#[must_use]
pub fn wrap_symbols(text: &str) -> String {
    let wrapped = outside_code_spans(text, |plain| {
        SYMBOL_PATTERN.replace_all(plain, "`$0`").into_owned()
    });

    DOUBLED_BACKTICK_PATTERN.replace_all(&wrapped, "`").into_owned()
}

/// Applies `rewrite` to every stretch of `text` that is not an inline-code span.
fn outside_code_spans(text: &str, rewrite: impl Fn(&str) -> String) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for span in CODE_SPAN_PATTERN.find_iter(text) {
        out.push_str(&rewrite(&text[last..span.start()]));
        out.push_str(span.as_str());
        last = span.end();
    }
    out.push_str(&rewrite(&text[last..]));

    out
}

fn expand_shorthand(text: &str) -> String {
    let mut text = VISUAL_STUDIO_PATTERN
        .replace_all(text, "Visual Studio $1")
        .into_owned();

    for (pattern, canonical) in PROPER_NOUNS.iter() {
        text = pattern.replace_all(&text, *canonical).into_owned();
    }

    ARM_PATTERN
        .replace_all(&text, |caps: &Captures| {
            let spaced = caps.get(0).is_some_and(|token| {
                text[..token.start()].ends_with(char::is_whitespace)
                    && text[token.end()..].starts_with(char::is_whitespace)
            });
            if spaced {
                format!("ARM{}", &caps[1])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn fix_contractions(text: &str) -> String {
    CONTRACTION_PATTERN
        .replace_all(text, |caps: &Captures| {
            let word = &caps[1];
            let fixed = format!("{}'{}", &word[..word.len() - 1], &word[word.len() - 1..]);
            let mut chars = fixed.chars();
            match chars.next() {
                Some(first) if first.is_uppercase() => first.to_string() + &chars.as_str().to_lowercase(),
                _ => fixed.to_lowercase(),
            }
        })
        .into_owned()
}

fn strip_mentions(text: &str) -> String {
    MENTION_PATTERN.replace_all(text, "$1$2").into_owned()
}

/// Uppercases the first character, used by decorated output.
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_call_syntax() {
        assert_eq!(
            normalize("add on_message_create() handler"),
            "add `on_message_create()` handler"
        );
    }

    #[test]
    fn wraps_qualified_and_snake_case_identifiers() {
        assert_eq!(
            normalize("use dpp::snowflake in guild_member"),
            "use `dpp::snowflake` in `guild_member`"
        );
    }

    #[test]
    fn wraps_filenames_with_known_extensions() {
        assert_eq!(
            normalize("tidy CMakeLists.txt and cluster.h"),
            "tidy `CMakeLists.txt` and `cluster.h`"
        );
    }

    #[test]
    fn leaves_existing_code_spans_alone() {
        assert_eq!(
            normalize("call `foo_bar baz()` here"),
            "call `foo_bar baz()` here"
        );
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let inputs = [
            "feat: add on_message_create() handler",
            "fix: dpp::cluster::on_ready() wasnt firing on windows vs2019",
            "docs: faq entry for snowflake_t in README.md",
            "build: support arm64 and arm32 on linux",
        ];
        for input in inputs {
            let once = normalize(input);
            let twice = normalize(&once);
            assert_eq!(once, twice, "input: {input}");
            assert!(!once.contains("``"), "doubled delimiter in: {once}");
        }
    }

    #[test]
    fn expands_shorthand_as_whole_words() {
        assert_eq!(normalize("build on vs2022"), "build on Visual Studio 2022");
        assert_eq!(normalize("update the faq"), "update the FAQ");
        assert_eq!(normalize("faqs page"), "faqs page");
        assert_eq!(
            normalize("freebsd, linux and WINDOWS"),
            "FreeBSD, Linux and Windows"
        );
        assert_eq!(normalize("microsoft discord"), "Microsoft Discord");
    }

    #[test]
    fn uppercases_arm_only_between_whitespace() {
        assert_eq!(normalize("build for arm64 today"), "build for ARM64 today");
        assert_eq!(normalize("build for farm64 today"), "build for farm64 today");
        assert_eq!(normalize("arm64 first"), "arm64 first");
        assert_eq!(normalize("ends with arm64"), "ends with arm64");
    }

    #[test]
    fn uppercases_adjacent_arm_tokens() {
        assert_eq!(
            normalize("support arm64 arm32 boards"),
            "support ARM64 ARM32 boards"
        );
    }

    #[test]
    fn shorthand_inside_code_spans_is_left_alone() {
        assert_eq!(normalize("include windows.h on windows"), "include `windows.h` on Windows");
        assert_eq!(normalize("call vs2019() from vs2019"), "call `vs2019()` from Visual Studio 2019");
        assert_eq!(normalize("`linux_only` path on linux"), "`linux_only` path on Linux");
    }

    #[test]
    fn fixes_contractions() {
        assert_eq!(normalize("it wasnt set"), "it wasn't set");
        assert_eq!(normalize("Isnt set"), "Isn't set");
        assert_eq!(normalize("WONT compile"), "Won't compile");
    }

    #[test]
    fn strips_mention_markers() {
        assert_eq!(normalize("thanks @@someone and @other"), "thanks someone and other");
        assert_eq!(normalize("@user fix"), "user fix");
    }

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(capitalize_first("add `foo()`"), "Add `foo()`");
        assert_eq!(capitalize_first(""), "");
    }
}
