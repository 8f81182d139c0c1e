use reqwest::blocking::Client;

use crate::error::SgcError;

// All profile URL forms that are accepted as input.
const URL_FORMATS: [&str; 6] = [
    "https://steamcommunity.com/profiles/",
    "https://steamcommunity.com/id/",
    "http://steamcommunity.com/profiles/",
    "http://steamcommunity.com/id/",
    "steamcommunity.com/profiles/",
    "steamcommunity.com/id/",
];

/// Turns user input into a canonical profile URL.
///
/// Accepts the community URL forms with or without a scheme, plus a bare
/// numeric ID or vanity name as shorthand. Anything trailing the profile
/// segment is truncated. Does not check that the profile actually exists.
pub fn normalize_profile_url(input: &str) -> Result<String, SgcError> {
    let input = input.trim();

    let Some(prefix) = URL_FORMATS.iter().find(|f| input.starts_with(*f)) else {
        if !input.is_empty()
            && input
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            let kind = if input.chars().all(|c| c.is_ascii_digit()) {
                "profiles"
            } else {
                "id"
            };
            return Ok(format!("https://steamcommunity.com/{kind}/{input}"));
        }
        return Err(SgcError::MalformedUrl(input.to_string()));
    };

    let segment = input[prefix.len()..].split('/').next().unwrap_or("");
    if segment.is_empty() {
        return Err(SgcError::MalformedUrl(input.to_string()));
    }

    let url = format!("{prefix}{segment}");
    if url.starts_with("http") {
        Ok(url)
    } else {
        Ok(format!("https://{url}"))
    }
}

/// Fetches the raw markup of a profile's public games listing.
///
/// One GET, no retries. A non-success status or a non-HTML response is fatal.
pub fn fetch_games_page(client: &Client, profile_url: &str) -> Result<String, SgcError> {
    let url = format!("{profile_url}/games/?tab=all");

    let response = client.get(&url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(SgcError::Status(status.as_u16(), url));
    }

    let is_html = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"));
    if !is_html {
        return Err(SgcError::NotHtml);
    }

    Ok(response.text()?)
}
