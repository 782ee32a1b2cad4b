use tracing::warn;

/// Split a header string in format "Name: Value" into its trimmed parts
pub fn parse_header(header_str: &str) -> Option<(&str, &str)> {
    let Some((name, value)) = header_str.split_once(':') else {
        warn!(
            "Invalid header format: '{}'. Expected 'Name: Value'",
            header_str
        );
        return None;
    };

    let name = name.trim();
    if name.is_empty() {
        warn!("Invalid header name in '{}'", header_str);
        return None;
    }

    Some((name, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("Referer: https://example.com"),
            Some(("Referer", "https://example.com"))
        );
        assert_eq!(parse_header("X-Empty:"), Some(("X-Empty", "")));
    }

    #[test]
    fn test_invalid_header() {
        assert_eq!(parse_header("no colon here"), None);
        assert_eq!(parse_header(" : value"), None);
    }
}
