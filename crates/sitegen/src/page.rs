//! Page assembly: title extraction and template substitution.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::PageOptions;
use crate::{Result, SitegenError};

/// A line opening with a single `#` (not `##`, `###`, ...)
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#([^#].+)").expect("title pattern is valid"));

/// Return the trimmed text of the first level-1 heading line
pub fn extract_title(markdown: &str) -> Result<String> {
    TITLE_RE
        .captures(markdown)
        .map(|caps| caps[1].trim().to_string())
        .ok_or(SitegenError::MissingTitle)
}

/// Replace every title and content placeholder in the template
pub fn fill_template(template: &str, title: &str, content: &str, options: &PageOptions) -> String {
    template
        .replace(&options.title_placeholder, title)
        .replace(&options.content_placeholder, content)
}
