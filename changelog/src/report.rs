use indexmap::IndexMap;

/// Grouped release notes: category label → descriptions, both in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogReport {
    sections: IndexMap<String, Vec<String>>,
}

impl ChangelogReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a description, opening the category on first use.
    pub fn push(&mut self, label: impl Into<String>, description: impl Into<String>) {
        self.sections
            .entry(label.into())
            .or_default()
            .push(description.into());
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(label, items)| (label.as_str(), items.as_slice()))
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.sections.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.sections.get(label).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of descriptions across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }
}
