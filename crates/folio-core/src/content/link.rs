use url::Url;

/// Where activating a link leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-page fragment, stored without the leading '#'
    Fragment(String),
    /// Absolute URL handed to the OS opener (https, mailto, ...)
    External(Url),
    /// Bare "#" or an unparseable reference; activating it does nothing
    Inert,
}

impl LinkTarget {
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        if let Some(fragment) = href.strip_prefix('#') {
            if fragment.is_empty() {
                return LinkTarget::Inert;
            }
            return LinkTarget::Fragment(fragment.to_string());
        }

        match Url::parse(href) {
            Ok(url) => LinkTarget::External(url),
            Err(e) => {
                tracing::debug!(href, error = %e, "Link is neither a fragment nor an absolute URL");
                LinkTarget::Inert
            }
        }
    }
}
