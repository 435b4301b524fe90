//! Fixed site settings: where the data and avatar live, footer year.

use portfolio_view::PageConfig;

/// Profile document, relative to the site base.
pub const DATA_FILE: &str = "portfolio-data.json";
/// Avatar image, relative to the site base.
pub const AVATAR_FILE: &str = "avatar.jpeg";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Prefix for asset URLs. Empty (the default) keeps them
    /// document-relative, so the browser resolves them against the
    /// `<base href>` Trunk writes for `public_url`.
    pub base_url: String,
    pub data_file: String,
    pub avatar_file: String,
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: String::new(),
            data_file: DATA_FILE.into(),
            avatar_file: AVATAR_FILE.into(),
            copyright_year: PageConfig::default().copyright_year,
        }
    }
}

impl SiteConfig {
    pub fn with_base(base_url: impl Into<String>) -> Self {
        SiteConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn data_url(&self) -> String {
        join(&self.base_url, &self.data_file)
    }

    pub fn avatar_url(&self) -> String {
        join(&self.base_url, &self.avatar_file)
    }

    /// Settings the view components need.
    pub fn page(&self) -> PageConfig {
        PageConfig {
            avatar_src: self.avatar_url(),
            copyright_year: self.copyright_year,
        }
    }
}

fn join(base: &str, file: &str) -> String {
    if base.is_empty() {
        return file.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}
