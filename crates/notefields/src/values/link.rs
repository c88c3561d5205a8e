//! Link (URL) values.

use super::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkValue {
    value: String,
    scheme: String,
    host: String,
    path: String,
}

impl LinkValue {
    pub fn parse(text: &str) -> Self {
        let value = text.trim().to_string();
        let (scheme, rest) = match value.split_once("://") {
            Some((scheme, rest)) => (scheme.to_lowercase(), rest),
            None => match value.split_once(':') {
                Some((scheme, rest))
                    if scheme.eq_ignore_ascii_case("mailto")
                        || scheme.eq_ignore_ascii_case("file") =>
                {
                    (scheme.to_lowercase(), rest)
                }
                _ => (String::new(), value.as_str()),
            },
        };
        let (host, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };
        Self {
            scheme,
            host: host.to_lowercase(),
            path: path.to_string(),
            value,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FieldValue for LinkValue {
    fn value(&self) -> &str {
        &self.value
    }

    /// Host (without `www.`) and path, lowercased; the scheme does not take part.
    fn sort_key(&self) -> String {
        let host = self.host.strip_prefix("www.").unwrap_or(&self.host);
        format!("{}{}", host, self.path.trim_end_matches('/')).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_url_parts() {
        let link = LinkValue::parse(" https://Example.com/docs/page.html ");
        assert_eq!(link.value(), "https://Example.com/docs/page.html");
        assert_eq!(link.scheme(), "https");
        assert_eq!(link.host(), "example.com");
        assert_eq!(link.path(), "/docs/page.html");
    }

    #[test]
    fn test_sort_key_ignores_scheme_and_www() {
        assert_eq!(
            LinkValue::parse("http://www.example.com/a/").sort_key(),
            LinkValue::parse("https://example.com/a").sort_key()
        );
    }

    #[test]
    fn test_mailto_links() {
        let link = LinkValue::parse("mailto:someone@example.com");
        assert_eq!(link.scheme(), "mailto");
        assert_eq!(link.host(), "someone@example.com");
    }

    #[test]
    fn test_bare_host() {
        let link = LinkValue::parse("example.org");
        assert_eq!(link.scheme(), "");
        assert_eq!(link.sort_key(), "example.org");
    }
}
