//! Links into the Checkmarx web viewer

/// Path segment every report deep link is anchored on
pub const DEEP_LINK_MARKER: &str = "CxWebClient";

/// Rebase the report's raw `DeepLink` value onto `server_url`.
///
/// The part of the raw link after the first [`DEEP_LINK_MARKER`] is kept and
/// joined as `{server_url}/CxWebClient{rest}`. A missing attribute or a value
/// without the marker yields an empty link.
pub fn construct(raw: Option<&str>, server_url: &str) -> String {
    let Some(raw) = raw else {
        log::error!("\"DeepLink\" attribute was not found in element \"CxXMLResults\" in XML report");
        return String::new();
    };

    match raw.split_once(DEEP_LINK_MARKER) {
        Some((_, rest)) => format!("{}/{}{}", server_url, DEEP_LINK_MARKER, rest),
        None => {
            log::warn!(
                "DeepLink value found in XML report is of unexpected format: {}. \
                 The code viewer link will not be functional",
                raw
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER: &str = "https://cx.example.com";

    #[test]
    fn test_construct_rebases_on_server() {
        let raw = "http://10.0.0.5/CxWebClient/ViewerMain.aspx?scanid=1000054&projectid=12";
        assert_eq!(
            construct(Some(raw), SERVER),
            "https://cx.example.com/CxWebClient/ViewerMain.aspx?scanid=1000054&projectid=12"
        );
    }

    #[test]
    fn test_construct_matches_marker_offset() {
        let raw = "http://internal-host:80/CxWebClient/x?y=1";
        let pos = raw.find(DEEP_LINK_MARKER).unwrap();
        let expected = format!(
            "{}/{}{}",
            SERVER,
            DEEP_LINK_MARKER,
            &raw[pos + DEEP_LINK_MARKER.len()..]
        );
        assert_eq!(construct(Some(raw), SERVER), expected);
    }

    #[test]
    fn test_construct_keeps_text_after_first_marker() {
        let raw = "http://a/CxWebClient/b/CxWebClient/c";
        assert_eq!(
            construct(Some(raw), SERVER),
            "https://cx.example.com/CxWebClient/b/CxWebClient/c"
        );
    }

    #[test]
    fn test_construct_marker_at_end() {
        assert_eq!(
            construct(Some("http://a/CxWebClient"), SERVER),
            "https://cx.example.com/CxWebClient"
        );
    }

    #[test]
    fn test_construct_without_marker() {
        assert_eq!(construct(Some("http://a/Viewer.aspx?id=1"), SERVER), "");
        assert_eq!(construct(Some(""), SERVER), "");
    }

    #[test]
    fn test_construct_missing_attribute() {
        assert_eq!(construct(None, SERVER), "");
    }
}
