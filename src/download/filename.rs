//! Destination file names derived from source URLs.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{BootstrapError, Result};

/// Final segment of a URL's percent-decoded path.
///
/// Query strings and fragments are ignored. A URL whose path ends in `/`
/// has no file name and is rejected.
///
/// ```
/// use tidal_bootstrap::download::filename_from_url;
///
/// let name = filename_from_url("https://example.com/path/My%20File.zip").unwrap();
/// assert_eq!(name, "My File.zip");
/// ```
pub fn filename_from_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| invalid(url))?;
    let decoded = percent_decode_str(parsed.path()).decode_utf8_lossy();

    match decoded.rsplit('/').next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => Ok(name.to_string()),
        _ => Err(invalid(url)),
    }
}

fn invalid(url: &str) -> BootstrapError {
    BootstrapError::InvalidUrl {
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Dependency;

    #[test]
    fn decodes_and_takes_last_segment() {
        assert_eq!(
            filename_from_url("https://example.com/path/My%20File.zip").unwrap(),
            "My File.zip"
        );
    }

    #[test]
    fn ignores_query_and_fragment() {
        assert_eq!(
            filename_from_url("https://example.com/dl/atom-mac.zip?token=abc#x").unwrap(),
            "atom-mac.zip"
        );
    }

    #[test]
    fn encoded_slash_is_split_after_decoding() {
        assert_eq!(
            filename_from_url("https://example.com/a/b%2Fc.dmg").unwrap(),
            "c.dmg"
        );
    }

    #[test]
    fn trailing_slash_has_no_file_name() {
        let err = filename_from_url("https://example.com/downloads/").unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidUrl { .. }));
    }

    #[test]
    fn bare_host_has_no_file_name() {
        assert!(filename_from_url("https://example.com").is_err());
    }

    #[test]
    fn unparseable_url_is_rejected() {
        assert!(filename_from_url("not a url").is_err());
    }

    #[test]
    fn builtin_sources_have_file_names() {
        assert_eq!(
            filename_from_url(Dependency::Ghci.source_url()).unwrap(),
            "Haskell Platform 8.6.5 Core-x86_64.pkg"
        );
        assert_eq!(
            filename_from_url(Dependency::Atom.source_url()).unwrap(),
            "atom-mac.zip"
        );
        assert_eq!(
            filename_from_url(Dependency::SuperCollider.source_url()).unwrap(),
            "SuperCollider-3.13.0-macOS-universal.dmg"
        );
    }
}
