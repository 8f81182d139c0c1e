use std::collections::HashSet;

use crate::game::GameEntry;
use crate::user::UserLibrary;

const TITLE_WIDTH: usize = 25;
const NAME_WIDTH: usize = 8;

/// Renders the ownership chart for the given libraries.
///
/// Rows are the union of all games in order of first appearance (users in
/// input order, games in library order); columns are the users, also in
/// input order. Same algorithm for one user or ten. The caller decides
/// where the rendered chart goes.
pub fn build_chart(libraries: &[UserLibrary]) -> String {
    let games = union_games(libraries);
    let owned: Vec<HashSet<u32>> = libraries
        .iter()
        .map(|lib| lib.games.iter().map(|g| g.app_id).collect())
        .collect();

    let mut header = format!("{} +", fit_width("Game Title", TITLE_WIDTH));
    let mut separator = format!("{}+", "-".repeat(TITLE_WIDTH + 1));
    for lib in libraries {
        header.push_str("  ");
        header.push_str(&fit_width(&lib.persona_name, NAME_WIDTH));
        header.push_str(" +");
        separator.push_str(&"-".repeat(NAME_WIDTH + 3));
        separator.push('+');
    }

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for game in &games {
        out.push_str(&fit_width(&game.name, TITLE_WIDTH));
        out.push_str(" |");
        for owns in &owned {
            // Marker centered in a NAME_WIDTH + 3 cell
            out.push_str("     ");
            out.push(if owns.contains(&game.app_id) { 'X' } else { ' ' });
            out.push_str("     |");
        }
        out.push('\n');
    }

    out.push_str(&separator);
    out.push('\n');

    out.push_str("\nFun facts:\n");
    for lib in libraries {
        out.push_str(&format!(
            "{} owns {} total games.\n",
            lib.persona_name,
            lib.games.len()
        ));
    }
    out.push_str(&format!(
        "This group of players owns a total of {} unique games!\n",
        games.len()
    ));

    out
}

/// Every distinct game across all libraries, keyed by app id, in order of
/// first appearance. The name seen first wins.
fn union_games(libraries: &[UserLibrary]) -> Vec<GameEntry> {
    let mut seen = HashSet::new();
    let mut union = Vec::new();
    for lib in libraries {
        for game in &lib.games {
            if seen.insert(game.app_id) {
                union.push(game.clone());
            }
        }
    }
    union
}

/// Cuts or pads a string to exactly `width` display characters.
fn fit_width(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count > width {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        format!("{s:<width$}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(persona_name: &str, games: &[(u32, &str)]) -> UserLibrary {
        UserLibrary {
            persona_name: persona_name.to_string(),
            games: games
                .iter()
                .map(|&(id, name)| GameEntry::new(id, name.to_string()))
                .collect(),
        }
    }

    // Table body rows, i.e. the lines between the two separators.
    fn game_rows(chart: &str) -> Vec<String> {
        let lines: Vec<&str> = chart.lines().collect();
        lines[2..]
            .iter()
            .take_while(|l| !l.starts_with('-'))
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn worked_example_two_users() {
        let a = library("A", &[(1, "Game1"), (2, "Game2")]);
        let b = library("B", &[(2, "Game2"), (3, "Game3")]);
        let chart = build_chart(&[a, b]);

        let rows = game_rows(&chart);
        assert_eq!(rows.len(), 3);

        // First-appearance order: Game1, Game2, Game3
        assert!(rows[0].starts_with("Game1"));
        assert!(rows[1].starts_with("Game2"));
        assert!(rows[2].starts_with("Game3"));

        // Game1: A only. Game2: both. Game3: B only.
        assert_eq!(rows[0].matches('X').count(), 1);
        assert_eq!(rows[1].matches('X').count(), 2);
        assert_eq!(rows[2].matches('X').count(), 1);

        let x_in_first_column = |row: &str| row[TITLE_WIDTH + 2..].find('X') == Some(5);
        assert!(x_in_first_column(&rows[0]));
        assert!(!x_in_first_column(&rows[2]));
    }

    #[test]
    fn one_row_per_distinct_game_even_when_shared() {
        let a = library("A", &[(1, "Game1"), (2, "Game2")]);
        let b = library("B", &[(2, "Game2"), (1, "Game1")]);
        let chart = build_chart(&[a, b]);
        assert_eq!(game_rows(&chart).len(), 2);
        assert_eq!(chart.matches("Game1").count(), 1);
        assert_eq!(chart.matches("Game2").count(), 1);
    }

    #[test]
    fn rebuilding_is_byte_identical() {
        let build = || {
            build_chart(&[
                library("A", &[(1, "Game1"), (2, "Game2")]),
                library("B", &[(3, "Game3")]),
            ])
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn single_user_marks_every_row() {
        let chart = build_chart(&[library("Solo", &[(1, "Game1"), (2, "Game2")])]);
        let rows = game_rows(&chart);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.matches('X').count() == 1));
    }

    #[test]
    fn disjoint_libraries_share_no_row() {
        let a = library("A", &[(1, "Game1"), (2, "Game2")]);
        let b = library("B", &[(3, "Game3"), (4, "Game4")]);
        let chart = build_chart(&[a, b]);
        let rows = game_rows(&chart);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.matches('X').count() == 1));
    }

    #[test]
    fn empty_library_gets_an_unmarked_column() {
        let a = library("A", &[(1, "Game1")]);
        let b = library("B", &[]);
        let chart = build_chart(&[a, b]);

        let rows = game_rows(&chart);
        assert_eq!(rows.len(), 1);
        // Only A's column carries the marker.
        assert_eq!(rows[0].matches('X').count(), 1);
        assert_eq!(rows[0][TITLE_WIDTH + 2..].find('X'), Some(5));

        // Header still names both users.
        let header = chart.lines().next().unwrap();
        assert!(header.contains('A') && header.contains('B'));
    }

    #[test]
    fn header_and_rows_line_up() {
        let chart = build_chart(&[
            library("Alice", &[(1, "Game1")]),
            library("Bob", &[(1, "Game1")]),
        ]);
        let lines: Vec<&str> = chart.lines().collect();
        let width = lines[0].chars().count();
        assert_eq!(lines[1].chars().count(), width);
        assert_eq!(lines[2].chars().count(), width);
    }

    #[test]
    fn long_titles_and_names_are_cut() {
        assert_eq!(fit_width("A Very Long Game Title Indeed", 25).chars().count(), 25);
        assert!(fit_width("A Very Long Game Title Indeed", 25).ends_with("..."));
        assert_eq!(fit_width("short", 8), "short   ");
    }
}
