//! Line scanner that pulls REST methods out of the `cluster::*` sources.
//!
//! The scanner is a three-state machine: it searches for a
//! `void cluster::name(..., command_completion_event_t callback)` opening,
//! reads the body looking for the type the call resolves to, and emits a
//! [`Method`] when the closing brace is reached.

use crate::utils::{
    CONFIRMATION_PATTERN, FUNCTION_END_PATTERN, FUNCTION_START_PATTERN, NAME_DECORATION_PATTERN,
    REST_REQUEST_LIST_PATTERN, REST_REQUEST_PATTERN, TRAILING_COMMA_PATTERN,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Methods whose signatures cannot be wrapped mechanically.
pub const BLACKLIST: [&str; 8] = [
    "channel_edit_permissions",
    "message_add_reaction",
    "message_delete_reaction",
    "message_delete_reaction_emoji",
    "message_delete_all_reactions",
    "message_delete_own_reaction",
    "message_get_reactions",
    "channel_typing",
];

/// Return types that cannot be read from the method body.
pub const FORCED_RETURNS: [(&str, &str); 5] = [
    ("direct_message_create", "message"),
    ("guild_get_members", "guild_member_map"),
    ("guild_search_members", "guild_member_map"),
    ("message_create", "message"),
    ("message_edit", "message"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SearchForFunction,
    InFunction,
    EndOfFunction,
}

/// A REST method found in the cluster sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    /// Parameter list as written in the definition, without the callback.
    pub parameters: String,
    pub return_type: String,
}

impl Method {
    /// Bare parameter names, e.g. `const class channel &c` → `c`.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<String> {
        self.parameters
            .split(',')
            .filter_map(|parameter| {
                let last = parameter.trim().rsplit(' ').next()?;
                let name = NAME_DECORATION_PATTERN.replace_all(last, "");
                (!name.is_empty()).then(|| name.into_owned())
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct Scanner {
    blacklist: HashSet<String>,
    forced_returns: HashMap<String, String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(
            BLACKLIST,
            FORCED_RETURNS
                .into_iter()
                .map(|(name, return_type)| (name.to_string(), return_type.to_string())),
        )
    }
}

impl Scanner {
    pub fn new<B, F>(blacklist: B, forced_returns: F) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        F: IntoIterator<Item = (String, String)>,
    {
        Self {
            blacklist: blacklist.into_iter().map(Into::into).collect(),
            forced_returns: forced_returns.into_iter().collect(),
        }
    }

    /// Scans concatenated cluster sources and returns every wrappable method
    /// in source order.
    #[must_use]
    pub fn scan(&self, source: &str) -> Vec<Method> {
        let mut methods = Vec::new();
        let mut state = ScanState::SearchForFunction;
        let mut name = String::new();
        let mut parameters = String::new();
        let mut inferred = String::new();

        for line in source.lines() {
            match state {
                ScanState::SearchForFunction => {
                    let Some(caps) = FUNCTION_START_PATTERN.captures(line) else {
                        continue;
                    };
                    let found = caps[1].trim();
                    if self.blacklist.contains(found) {
                        debug!(method = found, "skipping blacklisted method");
                        continue;
                    }
                    name = found.to_string();
                    parameters = TRAILING_COMMA_PATTERN.replace(&caps[2], "").into_owned();
                    inferred.clear();
                    state = ScanState::InFunction;
                }
                ScanState::InFunction => {
                    if FUNCTION_END_PATTERN.is_match(line) {
                        state = ScanState::EndOfFunction;
                    } else if let Some(caps) = REST_REQUEST_PATTERN.captures(line) {
                        inferred = caps[1].to_string();
                    } else if let Some(caps) = REST_REQUEST_LIST_PATTERN.captures(line) {
                        inferred = format!("{}_map", &caps[1]);
                    } else if let Some(caps) = CONFIRMATION_PATTERN.captures(line) {
                        inferred = caps[1].to_string();
                    }
                }
                ScanState::EndOfFunction => {}
            }

            if state == ScanState::EndOfFunction {
                match self.return_type(&name, &inferred) {
                    Some(return_type) => {
                        debug!(method = %name, %return_type, "found method");
                        methods.push(Method {
                            name: std::mem::take(&mut name),
                            parameters: std::mem::take(&mut parameters),
                            return_type,
                        });
                    }
                    None => warn!(method = %name, "no return type found, method skipped"),
                }
                state = ScanState::SearchForFunction;
            }
        }

        if state == ScanState::InFunction {
            warn!(method = %name, "source ended inside a method body");
        }
        methods
    }

    fn return_type(&self, name: &str, inferred: &str) -> Option<String> {
        match self.forced_returns.get(name) {
            Some(forced) => Some(forced.clone()),
            None if !inferred.is_empty() => Some(inferred.to_string()),
            None => None,
        }
    }
}
