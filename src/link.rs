use serde::Serialize;

/// Prefixes of links leaving a site.
pub const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://"];
/// Markers of links to local development servers.
pub const LOCAL_MARKERS: &[&str] = &["localhost", "127.0.0.1"];
/// A `target` attribute value opening a new browsing context.
pub const NEW_TAB_TARGET: &str = "_blank";
/// A `rel` attribute value for links opening new browsing contexts.
pub const NEW_TAB_REL: &str = "noopener noreferrer";

/// A link kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// A link to a remote host with an explicit HTTP(S) scheme.
    External,
    /// A link with an explicit HTTP(S) scheme to a local host.
    Local,
    /// Any other link.
    Internal,
}

impl LinkKind {
    /// Classifies a link by its `href` attribute value.
    ///
    /// Both checks are case-sensitive.
    pub fn classify(href: &str) -> Self {
        if !is_external(href) {
            Self::Internal
        } else if is_local(href) {
            Self::Local
        } else {
            Self::External
        }
    }

    /// Returns whether a link of this kind opens in a new browsing context.
    pub const fn opens_new_tab(self) -> bool {
        matches!(self, Self::External)
    }
}

/// Returns whether a link has an explicit HTTP(S) scheme.
pub fn is_external(href: &str) -> bool {
    EXTERNAL_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

/// Returns whether a link points to a local host anywhere in it.
pub fn is_local(href: &str) -> bool {
    LOCAL_MARKERS.iter().any(|marker| href.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_external_links() {
        assert_eq!(LinkKind::classify("https://example.com"), LinkKind::External);
        assert_eq!(
            LinkKind::classify("http://example.com/foo?bar#baz"),
            LinkKind::External
        );
    }

    #[test]
    fn classify_local_links() {
        assert_eq!(
            LinkKind::classify("http://localhost:8000/page"),
            LinkKind::Local
        );
        assert_eq!(LinkKind::classify("https://127.0.0.1/x"), LinkKind::Local);
        assert_eq!(
            LinkKind::classify("https://example.com/?redirect=localhost"),
            LinkKind::Local
        );
    }

    #[test]
    fn classify_internal_links() {
        for href in [
            "/docs/intro",
            "intro.html",
            "#section",
            "mailto:a@b.com",
            "tel:+1234",
            "//example.com/foo",
            "ftp://example.com",
        ] {
            assert_eq!(LinkKind::classify(href), LinkKind::Internal, "{href}");
        }
    }

    #[test]
    fn classify_local_marker_without_scheme() {
        assert_eq!(LinkKind::classify("/localhost/page"), LinkKind::Internal);
        assert!(is_local("/localhost/page"));
    }

    #[test]
    fn classify_case_sensitively() {
        assert_eq!(LinkKind::classify("HTTP://example.com"), LinkKind::Internal);
        assert_eq!(LinkKind::classify("Https://example.com"), LinkKind::Internal);
        assert_eq!(
            LinkKind::classify("https://LOCALHOST:8000"),
            LinkKind::External
        );
    }

    #[test]
    fn open_new_tab_for_external_links_only() {
        assert!(LinkKind::External.opens_new_tab());
        assert!(!LinkKind::Local.opens_new_tab());
        assert!(!LinkKind::Internal.opens_new_tab());
    }
}
