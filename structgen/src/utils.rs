use once_cell::sync::Lazy;
use regex::Regex;

/// `void cluster::name(params..., command_completion_event_t callback)`
pub static FUNCTION_START_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*void\s+cluster::([^(]+)\s*\((.*)command_completion_event_t\s*callback\s*\)")
        .expect("Failed to compile function start regex")
});

pub static FUNCTION_END_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\}\s*$").expect("Failed to compile function end regex"));

pub static REST_REQUEST_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rest_request<([^>]+)>").expect("Failed to compile rest_request regex"));

pub static REST_REQUEST_LIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rest_request_list<([^>]+)>").expect("Failed to compile rest_request_list regex")
});

pub static CONFIRMATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"callback\(confirmation_callback_t\(\w+, ([^(]+)\(.*, \w+\)\)")
        .expect("Failed to compile confirmation regex")
});

pub static TRAILING_COMMA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*$").expect("Failed to compile trailing comma regex"));

/// Whitespace, pointer and reference markers around a parameter name
pub static NAME_DECORATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\*&]+").expect("Failed to compile name decoration regex"));

pub static LEADING_TABS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\t+").expect("Failed to compile leading tabs regex"));

pub static SEE_TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@see (.+?)$").expect("Failed to compile @see regex"));

pub static CALLBACK_PARAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@param callback .*$").expect("Failed to compile @param regex"));

pub static ON_SUCCESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*\* On success ").expect("Failed to compile on success regex"));

pub static COMMENT_OPEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*/\*\*\s*$").expect("Failed to compile comment open regex"));
