use once_cell::sync::Lazy;
use regex::Regex;

/// Existing inline-code spans, left untouched by symbol wrapping
pub static CODE_SPAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]*`").expect("Failed to compile code span regex"));

/// Things that look like code: `call()`, `a::b`, `snake_case`, `file.ext`
pub static SYMBOL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?:\w+::)*[^\s`:/\[\]]+\(\)",
        r"|\w+(?:::\w+)+",
        r"|\b[A-Za-z0-9]+(?:_[A-Za-z0-9]+)+\b",
        r"|\b[\w-]+\.(?:cpp|hpp|cc|h|c|txt|md|json|cmake|yml|yaml|py|php|sh|rs|toml)\b",
    ))
    .expect("Failed to compile symbol regex")
});

pub static DOUBLED_BACKTICK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`{2,}").expect("Failed to compile backtick regex"));

pub static VISUAL_STUDIO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bvs(\d+)\b").expect("Failed to compile vs regex"));

/// `armNN` as a word; the whitespace on both sides is checked by the caller
pub static ARM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\barm(\d+)\b").expect("Failed to compile arm regex"));

pub static CONTRACTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(wasnt|isnt|wont)\b").expect("Failed to compile contraction regex")
});

pub static MENTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\s)@+(\S)").expect("Failed to compile mention regex"));

pub static LOW_VALUE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(typo|test|fix)\s\w+$").expect("Failed to compile low value regex"));

pub static VERSION_BUMP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)version bump").expect("Failed to compile version bump regex"));

/// Whole-word proper nouns and their canonical spelling
pub static PROPER_NOUNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("faq", "FAQ"),
        ("discord", "Discord"),
        ("microsoft", "Microsoft"),
        ("windows", "Windows"),
        ("linux", "Linux"),
        ("freebsd", "FreeBSD"),
    ]
    .into_iter()
    .map(|(word, canonical)| {
        let pattern = Regex::new(&format!(r"(?i)\b{word}\b"))
            .expect("Failed to compile proper noun regex");
        (pattern, canonical)
    })
    .collect()
});
