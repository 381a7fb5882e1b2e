/// Exclusion patterns collected for the lifetime of one run.
///
/// Each category is an append-only list of case-sensitive substring
/// patterns. A text matches a category when any pattern occurs in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    companies: Vec<String>,
    titles: Vec<String>,
    locations: Vec<String>,
    remove_disabled: bool,
}

impl RuleSet {
    pub fn new(
        companies: Vec<String>,
        titles: Vec<String>,
        locations: Vec<String>,
        remove_disabled: bool,
    ) -> Self {
        Self {
            companies,
            titles,
            locations,
            remove_disabled,
        }
    }

    pub fn append_company(&mut self, pattern: impl Into<String>) {
        self.companies.push(pattern.into());
    }

    pub fn append_title(&mut self, pattern: impl Into<String>) {
        self.titles.push(pattern.into());
    }

    pub fn append_location(&mut self, pattern: impl Into<String>) {
        self.locations.push(pattern.into());
    }

    pub fn remove_disabled(&self) -> bool {
        self.remove_disabled
    }

    pub fn matches_company(&self, text: &str) -> bool {
        any_substring(&self.companies, text)
    }

    pub fn matches_title(&self, text: &str) -> bool {
        any_substring(&self.titles, text)
    }

    pub fn matches_location(&self, text: &str) -> bool {
        any_substring(&self.locations, text)
    }

    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }
}

fn any_substring(patterns: &[String], text: &str) -> bool {
    patterns.iter().any(|pattern| text.contains(pattern.as_str()))
}
