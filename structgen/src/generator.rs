use crate::header::ClusterHeader;
use crate::scanner::Method;
use std::fmt;

const END_MARKER: &str = "/* End of auto-generated definitions */";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallStyle {
    /// Blocking `name_sync()` wrappers built on `dpp::sync`
    #[default]
    Sync,
    /// Awaitable `co_name()` wrappers built on `dpp::async`
    Coro,
}

impl fmt::Display for CallStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => f.write_str("sync"),
            Self::Coro => f.write_str("coro"),
        }
    }
}

/// What gets emitted for one method.
#[derive(Debug, Clone, Copy)]
pub struct Signature<'a> {
    pub method: &'a Method,
    /// Parameters as declared in `cluster.h`, defaults included.
    pub parameters: &'a str,
    /// Parameters as defined in the source, without defaults.
    pub no_defaults: &'a str,
    /// `, a, b` or empty, ready to append to an argument list.
    pub forwarded: &'a str,
}

impl Signature<'_> {
    /// Member-function pointer type of the wrapped method.
    fn member_pointer(&self) -> String {
        if self.no_defaults.is_empty() {
            "void (cluster::*)(command_completion_event_t)".to_string()
        } else {
            format!(
                "void (cluster::*)({}, command_completion_event_t)",
                self.no_defaults
            )
        }
    }
}

pub trait CallGenerator: Send + Sync {
    fn header_start(&self) -> String;
    fn source_start(&self) -> String;

    fn header_end(&self) -> String {
        format!("\n{END_MARKER}\n")
    }

    fn source_end(&self) -> String {
        format!("\n}};\n\n{END_MARKER}\n")
    }

    /// Lines added to every copied doc comment.
    fn comment_lines(&self) -> &[&'static str];

    fn header_def(&self, signature: &Signature<'_>) -> String;
    fn source_def(&self, signature: &Signature<'_>) -> String;
}

fn generated_banner(style: CallStyle) -> String {
    format!(
        "/************************************************************************************\n\
         \x20*\n\
         \x20* D++, A Lightweight C++ library for Discord\n\
         \x20*\n\
         \x20* Generated {style} call wrappers for dpp::cluster. Do not edit by hand;\n\
         \x20* regenerate with `reltool struct --style {style}`.\n\
         \x20*\n\
         \x20************************************************************************************/\n\n"
    )
}

pub struct SyncGenerator;

impl CallGenerator for SyncGenerator {
    fn header_start(&self) -> String {
        format!(
            "{}\n/* Auto-generated synchronous wrappers, see dpp::sync */\n\n",
            generated_banner(CallStyle::Sync)
        )
    }

    fn source_start(&self) -> String {
        format!(
            "{}#include <dpp/export.h>\n#include <dpp/snowflake.h>\n#include <dpp/cluster.h>\n\nnamespace dpp {{\n\n",
            generated_banner(CallStyle::Sync)
        )
    }

    fn comment_lines(&self) -> &[&'static str] {
        &[
            " * \\memberof dpp::cluster",
            " * @throw dpp::rest_exception upon failure to execute REST function",
            " * @warning This function is a blocking (synchronous) call and should only be used from within a separate thread.",
            " * Avoid direct use of this function inside an event handler.",
        ]
    }

    fn header_def(&self, s: &Signature<'_>) -> String {
        format!(
            "{} {}_sync({});\n\n",
            s.method.return_type, s.method.name, s.parameters
        )
    }

    fn source_def(&self, s: &Signature<'_>) -> String {
        format!(
            "{ret} cluster::{name}_sync({params}) {{\n\treturn dpp::sync<{ret}>(this, static_cast<{pointer}>(&cluster::{name}){forwarded});\n}}\n\n",
            ret = s.method.return_type,
            name = s.method.name,
            params = s.no_defaults,
            pointer = s.member_pointer(),
            forwarded = s.forwarded,
        )
    }
}

pub struct CoroGenerator;

impl CallGenerator for CoroGenerator {
    fn header_start(&self) -> String {
        format!(
            "{}\n/* Auto-generated coroutine wrappers, see dpp::async */\n\n",
            generated_banner(CallStyle::Coro)
        )
    }

    fn source_start(&self) -> String {
        format!(
            "{}#ifdef DPP_CORO\n\n#include <dpp/export.h>\n#include <dpp/snowflake.h>\n#include <dpp/cluster.h>\n\nnamespace dpp {{\n\n",
            generated_banner(CallStyle::Coro)
        )
    }

    fn source_end(&self) -> String {
        format!("\n}};\n\n{END_MARKER}\n\n#endif\n")
    }

    fn comment_lines(&self) -> &[&'static str] {
        &[" * \\memberof dpp::cluster"]
    }

    fn header_def(&self, s: &Signature<'_>) -> String {
        format!(
            "[[nodiscard]] async<confirmation_callback_t> co_{}({});\n\n",
            s.method.name, s.parameters
        )
    }

    fn source_def(&self, s: &Signature<'_>) -> String {
        format!(
            "async<confirmation_callback_t> cluster::co_{name}({params}) {{\n\treturn async{{ this, static_cast<{pointer}>(&cluster::{name}){forwarded} }};\n}}\n\n",
            name = s.method.name,
            params = s.no_defaults,
            pointer = s.member_pointer(),
            forwarded = s.forwarded,
        )
    }
}

pub fn create_generator(style: CallStyle) -> Box<dyn CallGenerator> {
    match style {
        CallStyle::Sync => Box::new(SyncGenerator),
        CallStyle::Coro => Box::new(CoroGenerator),
    }
}

/// Header and source text produced for one call style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCalls {
    pub header: String,
    pub source: String,
    pub methods: usize,
}

/// Renders wrappers for `methods`, taking defaults and doc comments from
/// `cluster` when the declaration can be found there.
#[must_use]
pub fn render_calls(
    methods: &[Method],
    cluster: &ClusterHeader,
    generator: &dyn CallGenerator,
) -> GeneratedCalls {
    let mut header = generator.header_start();
    let mut source = generator.source_start();

    for method in methods {
        if let Some(comment) = cluster.doc_comment(method, generator.comment_lines()) {
            header.push_str(&comment);
            header.push('\n');
        }

        let full = cluster.full_parameters(method);
        let names = method.parameter_names().join(", ");
        let forwarded = if names.is_empty() {
            String::new()
        } else {
            format!(", {names}")
        };
        let signature = Signature {
            method,
            parameters: full.as_deref().unwrap_or(&method.parameters),
            no_defaults: &method.parameters,
            forwarded: &forwarded,
        };

        header.push_str(&generator.header_def(&signature));
        source.push_str(&generator.source_def(&signature));
    }

    header.push_str(&generator.header_end());
    source.push_str(&generator.source_end());

    GeneratedCalls {
        header,
        source,
        methods: methods.len(),
    }
}
