pub const DEFAULT_UNWANTED_PHRASES: &[&str] = &[
    "Related posts:",
    "Categories:",
    "AWS Training",
    "AWS Certifications",
    "Find Answers",
    "Connect",
    "Get the Free Beginner's Guide to AWS Certification",
    "Follow",
    "Terms",
    "Fast-track your cloud career with our 🎯 Cloud Bootcamps",
];

/// Content containers, most specific first.
pub const DEFAULT_CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "#main-content",
    ".content",
    ".entry-content",
];

pub const RELATED_POSTS_MARKER: &str = "### Related posts:";

pub const DEFAULT_LINK_SELECTOR: &str = ".post-grid.bb-grid .ratio-wrap a";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub unwanted_phrases: Vec<String>,
    pub content_selectors: Vec<String>,
    /// Everything from the first occurrence of this marker onwards is dropped.
    pub trailing_marker: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            unwanted_phrases: DEFAULT_UNWANTED_PHRASES.iter().map(ToString::to_string).collect(),
            content_selectors: DEFAULT_CONTENT_SELECTORS.iter().map(ToString::to_string).collect(),
            trailing_marker: None,
        }
    }
}

impl ConvertOptions {
    /// Options for the link-file driver, which also cuts the related-posts tail.
    pub fn batch() -> Self {
        Self::default().with_trailing_marker(RELATED_POSTS_MARKER)
    }

    #[must_use]
    pub fn with_trailing_marker(mut self, marker: impl Into<String>) -> Self {
        self.trailing_marker = Some(marker.into());
        self
    }

    #[must_use]
    pub fn with_unwanted_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unwanted_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOptions {
    pub selector: String,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_LINK_SELECTOR.to_string(),
        }
    }
}
