// The games page embeds the library as JS data rather than table markup:
// `var personaName = "...";` and `var rgGames = [ {appid, name, ...}, ... ];`.
// Extraction slices those assignments out of the raw markup and parses the
// array as JSON. No DOM walking, no I/O.

use log::warn;

use crate::error::SgcError;
use crate::game::GameEntry;
use crate::user::UserLibrary;

/// Extracts a user's library from the raw markup of their games page.
///
/// Pure and deterministic. A page with zero games yields an empty library;
/// a game entry missing its appid or name is skipped.
pub fn extract_library(markup: &str) -> Result<UserLibrary, SgcError> {
    if !markup.contains("games_list") {
        if markup.contains("profile_private_info") {
            return Err(SgcError::PrivateProfile);
        }
        return Err(SgcError::MissingProfile);
    }

    let persona_name = extract_persona_name(markup).ok_or(SgcError::PersonaName)?;

    let raw_games = slice_games_array(markup).ok_or(SgcError::GamesList)?;
    let parsed = json::parse(raw_games).map_err(|_| SgcError::GamesList)?;

    let mut games = Vec::new();
    let mut skipped = 0usize;
    for entry in parsed.members() {
        let (Some(app_id), Some(name)) = (entry["appid"].as_u32(), entry["name"].as_str()) else {
            skipped += 1;
            continue;
        };
        games.push(GameEntry::new(app_id, name.to_string()));
    }
    if skipped > 0 {
        warn!("skipped {skipped} game entries missing an appid or name");
    }

    Ok(UserLibrary {
        persona_name,
        games,
    })
}

/// Reads the `var personaName = "...";` assignment.
fn extract_persona_name(markup: &str) -> Option<String> {
    let rest = &markup[markup.find("personaName")?..];
    let open = rest.find('"')?;
    let end = rest.find(';')?;
    if end <= open {
        return None;
    }
    json::parse(&rest[open..end])
        .ok()?
        .as_str()
        .map(str::to_string)
}

/// Slices the balanced `[ ... ]` array following `rgGames`.
///
/// Bracket depth is tracked with string-literal awareness so game names
/// containing `]` don't cut the array short.
fn slice_games_array(markup: &str) -> Option<&str> {
    let rest = &markup[markup.find("rgGames")?..];
    let open = rest.find('[')?;

    let mut depth = 0usize;
    let mut in_str = false;
    let mut escaped = false;
    for (i, &b) in rest.as_bytes().iter().enumerate().skip(open) {
        if in_str {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_str = false;
            }
            continue;
        }
        match b {
            b'"' => in_str = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[open..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
