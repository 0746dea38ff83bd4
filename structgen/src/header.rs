use crate::scanner::Method;
use crate::utils::{
    CALLBACK_PARAM_PATTERN, COMMENT_OPEN_PATTERN, LEADING_TABS_PATTERN, ON_SUCCESS_PATTERN,
    SEE_TAG_PATTERN, TRAILING_COMMA_PATTERN,
};
use regex::Regex;
use tracing::debug;

/// The declarations in `cluster.h`, used for default arguments and doc comments.
#[derive(Debug, Clone, Default)]
pub struct ClusterHeader {
    lines: Vec<String>,
}

impl ClusterHeader {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Matches the declaration of `method` whose parameter list mentions
    /// every parameter name in order. Group 1 is the parameter list.
    fn declaration_pattern(method: &Method) -> Option<Regex> {
        let names: Vec<String> = method
            .parameter_names()
            .iter()
            .map(|name| regex::escape(name))
            .collect();
        let pattern = format!(
            r"^\s*void\s+{}\s*\((.*{}.*)command_completion_event_t\s*callback\s*",
            regex::escape(&method.name),
            names.join(".*")
        );

        match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(e) => {
                debug!(method = %method.name, error = %e, "unusable declaration pattern");
                None
            }
        }
    }

    /// Parameter list of the declaration, default arguments included.
    #[must_use]
    pub fn full_parameters(&self, method: &Method) -> Option<String> {
        let pattern = Self::declaration_pattern(method)?;
        self.lines.iter().find_map(|line| {
            pattern
                .captures(line)
                .map(|caps| TRAILING_COMMA_PATTERN.replace(&caps[1], "").into_owned())
        })
    }

    /// The doc comment above the declaration, rewritten for a wrapper that
    /// returns `method.return_type`. `extra` lines go just before the closing
    /// `*/`.
    #[must_use]
    pub fn doc_comment(&self, method: &Method, extra: &[&str]) -> Option<String> {
        let pattern = Self::declaration_pattern(method)?;
        let declaration = self.lines.iter().position(|line| pattern.is_match(line))?;

        let see_replacement = format!("@see dpp::cluster::{}\n * @see $1", method.name);
        let return_replacement = format!(
            "@return {} returned object on completion",
            method.return_type
        );

        let mut block = Vec::new();
        for line in self.lines.get(1..declaration)?.iter().rev() {
            let line = LEADING_TABS_PATTERN.replace(line, "");
            if COMMENT_OPEN_PATTERN.is_match(&line) {
                block.push(line.into_owned());
                block.reverse();
                let close = block.len().saturating_sub(1);
                block.splice(close..close, extra.iter().map(|l| (*l).to_string()));
                return Some(block.join("\n").replace("\n\n", "\n"));
            }
            if ON_SUCCESS_PATTERN.is_match(&line) {
                block.push(String::new());
                continue;
            }
            let line = SEE_TAG_PATTERN.replace(&line, see_replacement.as_str());
            let line = CALLBACK_PARAM_PATTERN.replace(&line, return_replacement.as_str());
            block.push(line.into_owned());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CLUSTER_H: &str = "class DPP_EXPORT cluster {\n\
\t/**\n\
\t * @brief Get a guild\n\
\t *\n\
\t * @see https://discord.com/developers/docs/resources/guild#get-guild\n\
\t * @param guild_id Guild ID\n\
\t * @param callback Function to call when the API call completes.\n\
\t * On success the callback will contain a dpp::guild object in confirmation_callback_t::value.\n\
\t */\n\
\tvoid guild_get(snowflake guild_id, command_completion_event_t callback);\n\
\n\
\t/**\n\
\t * @brief Get messages\n\
\t */\n\
\tvoid messages_get(snowflake channel_id, snowflake around, uint64_t limit = 100, command_completion_event_t callback = utility::log_error());\n\
};";

    fn method(name: &str, parameters: &str, return_type: &str) -> Method {
        Method {
            name: name.to_string(),
            parameters: parameters.to_string(),
            return_type: return_type.to_string(),
        }
    }

    #[test]
    fn full_parameters_keep_defaults() {
        let header = ClusterHeader::parse(CLUSTER_H);
        let m = method(
            "messages_get",
            "snowflake channel_id, snowflake around, uint64_t limit",
            "message_map",
        );

        assert_eq!(
            header.full_parameters(&m).as_deref(),
            Some("snowflake channel_id, snowflake around, uint64_t limit = 100")
        );
        assert_eq!(
            header.full_parameters(&method("unknown_call", "", "x")),
            None
        );
    }

    #[test]
    fn doc_comment_is_rewritten_for_the_wrapper() {
        let header = ClusterHeader::parse(CLUSTER_H);
        let m = method("guild_get", "snowflake guild_id", "guild");

        assert_eq!(
            header.doc_comment(&m, &[" * \\memberof dpp::cluster"]).unwrap(),
            "/**\n\
             \x20* @brief Get a guild\n\
             \x20*\n\
             \x20* @see dpp::cluster::guild_get\n\
             \x20* @see https://discord.com/developers/docs/resources/guild#get-guild\n\
             \x20* @param guild_id Guild ID\n\
             \x20* @return guild returned object on completion\n\
             \x20* \\memberof dpp::cluster\n\
             \x20*/"
        );
    }

    #[test]
    fn missing_declaration_has_no_comment() {
        let header = ClusterHeader::parse(CLUSTER_H);
        assert_eq!(header.doc_comment(&method("nope", "", "x"), &[]), None);
    }
}
