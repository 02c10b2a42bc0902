use serde::{Deserialize, Serialize};

// Field order matters: serde serializes in declaration order, which is the
// key order the site's front end expects in the index files.

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct Post {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub description: String,
}

impl Post {
    pub fn new(title: String, slug: String, date: String, description: String) -> Self {
        let description = if description.is_empty() {
            format!("Blog post: {title}")
        } else {
            description
        };
        Self {
            title,
            slug,
            date,
            description,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct Project {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl Project {
    pub fn new(title: String, url: String, description: String) -> Self {
        let description = if description.is_empty() {
            format!("Project: {title}")
        } else {
            description
        };
        Self {
            title,
            url,
            description,
        }
    }

    /// Projects dedup by title, compared case-insensitively.
    pub fn same_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}
