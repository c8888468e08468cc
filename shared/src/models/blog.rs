//! Blog post models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of words kept in a list excerpt
pub const EXCERPT_WORDS: usize = 50;

/// A full blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    /// HTML body
    pub content: String,
    pub affiliate_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A blog post as shown in the paginated list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: i32,
    pub title: String,
    pub excerpt: String,
    pub affiliate_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn summary(&self) -> BlogPostSummary {
        BlogPostSummary {
            id: self.id,
            title: self.title.clone(),
            excerpt: excerpt(&self.content, EXCERPT_WORDS),
            affiliate_link: self.affiliate_link.clone(),
            created_at: self.created_at,
        }
    }

    /// Date as shown on the site, e.g. "March 5, 2025"
    pub fn display_date(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }
}

/// First `words` whitespace-separated words of `content`, followed by "..."
pub fn excerpt(content: &str, words: usize) -> String {
    let mut out = content
        .split_whitespace()
        .take(words)
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_excerpt_truncates() {
        let content = (1..=60).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let ex = excerpt(&content, EXCERPT_WORDS);
        assert!(ex.starts_with("w1 w2 "));
        assert!(ex.ends_with("w50..."));
        assert!(!ex.contains("w51"));
    }

    #[test]
    fn test_excerpt_short_content() {
        assert_eq!(excerpt("Aged  goat\ncheese", 50), "Aged goat cheese...");
        assert_eq!(excerpt("", 50), "...");
    }

    #[test]
    fn test_display_date() {
        let post = BlogPost {
            id: 1,
            title: "Washed rinds".to_string(),
            content: "<p>Stinky.</p>".to_string(),
            affiliate_link: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 3, 5, 10, 0, 0).unwrap(),
        };
        assert_eq!(post.display_date(), "March 5, 2025");
        assert_eq!(post.summary().excerpt, "<p>Stinky.</p>...");
    }
}
