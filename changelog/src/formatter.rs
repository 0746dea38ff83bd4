use crate::config::ChangelogConfig;
use crate::error::ChangelogError;
use crate::noise::is_low_value;
use crate::normalize::capitalize_first;
use crate::report::ChangelogReport;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Markdown headers and dash bullets
    #[default]
    Plain,
    /// Bold headers and `•` bullets, suited to chat announcements
    Decorated,
}

impl FromStr for RenderStyle {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "decorated" => Ok(Self::Decorated),
            other => Err(ChangelogError::UnknownStyle(other.to_string())),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Decorated => f.write_str("decorated"),
        }
    }
}

pub trait ReportFormatter: Send + Sync {
    fn header(&self, label: &str) -> String;
    fn bullet(&self, description: &str) -> String;

    /// Text appended after the trailing banner, if any.
    fn footer(&self, _version: Option<&str>) -> Option<String> {
        None
    }

    fn leading_banner(&self) -> &str;
    fn trailing_banner(&self) -> &str;

    fn render(&self, report: &ChangelogReport, version: Option<&str>) -> String {
        let sections: Vec<String> = report
            .sections()
            .filter_map(|(label, items)| {
                let bullets: Vec<String> = items
                    .iter()
                    .filter(|item| !is_low_value(item))
                    .map(|item| self.bullet(item))
                    .collect();
                if bullets.is_empty() {
                    return None;
                }

                let mut section = String::with_capacity(256);
                section.push_str(&self.header(label));
                section.push('\n');
                for bullet in bullets {
                    section.push_str(&bullet);
                    section.push('\n');
                }
                Some(section)
            })
            .collect();

        let mut output = String::with_capacity(1024);
        output.push_str(self.leading_banner());
        output.push_str("\n\n");
        if !sections.is_empty() {
            output.push_str(&sections.join("\n"));
            output.push('\n');
        }
        output.push_str(self.trailing_banner());
        output.push('\n');
        if let Some(footer) = self.footer(version) {
            output.push('\n');
            output.push_str(&footer);
            output.push('\n');
        }
        output
    }
}

#[derive(Debug, Clone)]
pub struct PlainFormatter {
    pub leading_banner: String,
    pub trailing_banner: String,
}

impl ReportFormatter for PlainFormatter {
    fn header(&self, label: &str) -> String {
        format!("## {label}")
    }

    fn bullet(&self, description: &str) -> String {
        format!("- {description}")
    }

    fn leading_banner(&self) -> &str {
        &self.leading_banner
    }

    fn trailing_banner(&self) -> &str {
        &self.trailing_banner
    }
}

#[derive(Debug, Clone)]
pub struct DecoratedFormatter {
    pub leading_banner: String,
    pub trailing_banner: String,
    pub download_template: String,
}

impl ReportFormatter for DecoratedFormatter {
    fn header(&self, label: &str) -> String {
        format!("**{label}**")
    }

    fn bullet(&self, description: &str) -> String {
        format!("• {}", capitalize_first(description))
    }

    fn footer(&self, version: Option<&str>) -> Option<String> {
        version
            .filter(|v| !v.trim().is_empty())
            .map(|v| self.download_template.replace("{version}", v.trim()))
    }

    fn leading_banner(&self) -> &str {
        &self.leading_banner
    }

    fn trailing_banner(&self) -> &str {
        &self.trailing_banner
    }
}

#[must_use]
pub fn create_formatter(style: RenderStyle, config: &ChangelogConfig) -> Box<dyn ReportFormatter> {
    match style {
        RenderStyle::Plain => Box::new(PlainFormatter {
            leading_banner: config.leading_banner.clone(),
            trailing_banner: config.trailing_banner.clone(),
        }),
        RenderStyle::Decorated => Box::new(DecoratedFormatter {
            leading_banner: config.leading_banner.clone(),
            trailing_banner: config.trailing_banner.clone(),
            download_template: config.download_template.clone(),
        }),
    }
}
