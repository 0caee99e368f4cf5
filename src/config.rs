use std::ffi::OsString;

use crate::error::AppError;

/// Environment variable holding the OpenWeatherMap API key
pub const API_KEY_VAR: &str = "OPEN_WEATHER_API";

/// Optional override of the current weather endpoint
pub const ENDPOINT_VAR: &str = "OPEN_WEATHER_ENDPOINT";

/// Joins the positional arguments into one city name.
/// Returns `None` when no city words were given.
///
/// Words that are not valid UTF-8 are converted lossily.
pub fn city_from_args<I>(args: I) -> Option<String>
where
    I: IntoIterator<Item = OsString>,
{
    let words: Vec<String> = args
        .into_iter()
        .map(|word| word.to_string_lossy().into_owned())
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Validates the raw value of [`API_KEY_VAR`]; unset and empty are both rejected.
pub fn api_key(value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(AppError::EnvVarNotSet(API_KEY_VAR.to_string())),
    }
}

/// Endpoint override from [`ENDPOINT_VAR`]; empty counts as unset.
pub fn endpoint(value: Option<String>) -> Option<String> {
    value.filter(|endpoint| !endpoint.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<OsString> {
        words.iter().map(OsString::from).collect()
    }

    #[test]
    fn no_arguments_means_no_city() {
        assert_eq!(city_from_args(args(&[])), None);
    }

    #[test]
    fn single_word_city() {
        assert_eq!(city_from_args(args(&["Paris"])), Some("Paris".to_string()));
    }

    #[test]
    fn multi_word_city_joined_with_single_spaces() {
        assert_eq!(
            city_from_args(args(&["New", "York"])),
            Some("New York".to_string())
        );
        assert_eq!(
            city_from_args(args(&["Rio", "de", "Janeiro"])),
            Some("Rio de Janeiro".to_string())
        );
    }

    #[test]
    fn api_key_present() {
        assert_eq!(api_key(Some("abc123".to_string())).unwrap(), "abc123");
    }

    #[test]
    fn api_key_missing_or_empty() {
        for value in [None, Some(String::new())] {
            let err = api_key(value).unwrap_err();
            assert!(matches!(err, AppError::EnvVarNotSet(ref name) if name == API_KEY_VAR));
            assert!(err.to_string().contains(API_KEY_VAR));
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_word_is_replaced_not_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let words = vec![
            OsString::from("San"),
            OsString::from_vec(b"\xff\xfe".to_vec()),
        ];
        assert_eq!(
            city_from_args(words),
            Some("San \u{FFFD}\u{FFFD}".to_string())
        );
    }

    #[test]
    fn empty_endpoint_falls_back_to_default() {
        assert_eq!(endpoint(None), None);
        assert_eq!(endpoint(Some(String::new())), None);
        assert_eq!(
            endpoint(Some("http://127.0.0.1:8080/weather".to_string())),
            Some("http://127.0.0.1:8080/weather".to_string())
        );
    }
}
