use crate::error::{ImportError, ImportResult};
use reqwest::Url;

/// Resolve the meetup.com "url name" of a group from its profile URL.
///
/// `https://www.meetup.com/My-Group/` and `https://www.meetup.com/My-Group`
/// both resolve to `My-Group`.
pub fn resolve_group_url_name(meetup_com_url: &str) -> ImportResult<String> {
    let url = Url::parse(meetup_com_url.trim())
        .map_err(|_| ImportError::InvalidGroupUrl(meetup_com_url.to_string()))?;

    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| ImportError::InvalidGroupUrl(meetup_com_url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash() {
        let name = resolve_group_url_name("https://www.meetup.com/My-Group/").unwrap();
        assert_eq!(name, "My-Group");
    }

    #[test]
    fn test_without_trailing_slash() {
        let name = resolve_group_url_name("https://www.meetup.com/My-Group").unwrap();
        assert_eq!(name, "My-Group");
    }

    #[test]
    fn test_localized_profile_url() {
        let name = resolve_group_url_name("https://www.meetup.com/de-DE/PHP-Usergroup-Berlin/")
            .unwrap();
        assert_eq!(name, "PHP-Usergroup-Berlin");
    }

    #[test]
    fn test_url_without_path_rejected() {
        let result = resolve_group_url_name("https://www.meetup.com/");
        assert!(matches!(result, Err(ImportError::InvalidGroupUrl(_))));

        let result = resolve_group_url_name("https://www.meetup.com");
        assert!(matches!(result, Err(ImportError::InvalidGroupUrl(_))));
    }

    #[test]
    fn test_not_a_url_rejected() {
        let result = resolve_group_url_name("My-Group");
        assert!(matches!(result, Err(ImportError::InvalidGroupUrl(_))));
    }
}
