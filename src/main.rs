// Game lists come from public community profile pages, not the Web API,
// so no API key is involved. A profile must have its game details set to
// public for the fetch to succeed.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::{error, info, LevelFilter};
use reqwest::blocking::Client;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

use error::SgcError;
use user::UserLibrary;

mod chart;
mod cli;
mod config;
mod error;
mod extract;
mod game;
mod profile;
mod user;

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("no other logger is installed");

    let matches = cli::build_command().get_matches();

    let mut out_dir = matches.get_one::<String>("out_dir").map(PathBuf::from);

    let client = Client::new();

    let libraries = if let Some(list) = matches.get_one::<String>("users") {
        let entries: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect();
        let Some(libraries) = fetch_all(&client, &entries) else {
            return;
        };
        libraries
    } else if let Some(path) = matches.get_one::<String>("config") {
        let config = match config::load(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                return;
            }
        };
        if out_dir.is_none() {
            out_dir = config.output_dir;
        }
        let Some(libraries) = fetch_all(&client, &config.profiles) else {
            return;
        };
        libraries
    } else {
        prompt_for_libraries(&client)
    };

    if libraries.is_empty() {
        error!("no profiles to compare");
        return;
    }

    let chart = chart::build_chart(&libraries);

    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("output"));
    match write_chart(&out_dir, &chart) {
        Ok(path) => info!("comparison chart written to {}", path.display()),
        Err(e) => error!("failed to write chart: {e}"),
    }
}

fn fetch_library(client: &Client, input: &str) -> Result<UserLibrary, SgcError> {
    let url = profile::normalize_profile_url(input)?;
    let page = profile::fetch_games_page(client, &url)?;
    extract::extract_library(&page)
}

/// Fetches every profile, one scoped thread per user. Any failure reports
/// the offending profile and yields `None`: no chart is produced from a
/// partial set.
fn fetch_all(client: &Client, entries: &[String]) -> Option<Vec<UserLibrary>> {
    let mut results: Vec<Option<Result<UserLibrary, SgcError>>> = Vec::new();
    results.resize_with(entries.len(), || None);

    // Per-input slots keep the output in input order regardless of which
    // fetch finishes first.
    std::thread::scope(|scope| {
        for (slot, entry) in results.iter_mut().zip(entries) {
            scope.spawn(move || *slot = Some(fetch_library(client, entry)));
        }
    });

    let mut libraries = Vec::with_capacity(entries.len());
    for (entry, result) in entries.iter().zip(results) {
        match result.expect("scoped fetch fills its slot") {
            Ok(library) => {
                info!("successfully accessed profile for {library}");
                libraries.push(library);
            }
            Err(e) => {
                error!("{entry}: {e}");
                return None;
            }
        }
    }
    Some(libraries)
}

/// Interactive fallback when neither `--users` nor a config file is given.
/// A failed entry is reported and re-prompted rather than aborting.
fn prompt_for_libraries(client: &Client) -> Vec<UserLibrary> {
    println!("Welcome to the Steam Game Comparator!");
    println!("Enter the URLs of each Steam profile to be compared.");
    println!(
        "(ex. 'https://steamcommunity.com/id/profilename' or \
         'https://steamcommunity.com/profiles/829839292863872')"
    );
    println!("Return an empty field when finished.");

    let mut libraries: Vec<UserLibrary> = Vec::new();
    loop {
        print!("URL #{}: ", libraries.len() + 1);
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        let Ok(read) = std::io::stdin().lock().read_line(&mut line) else {
            break;
        };
        if read == 0 {
            // stdin closed
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            if libraries.len() > 1 {
                break;
            }
            println!("ERROR: Two or more players are required for comparison.");
            continue;
        }

        match fetch_library(client, input) {
            Ok(library) => {
                println!("Successfully accessed profile for {library}.");
                libraries.push(library);
            }
            Err(e) => println!("ERROR: {e}"),
        }
    }
    libraries
}

fn write_chart(dir: &Path, chart: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = dir.join(format!("{stamp}.txt"));
    fs::write(&path, chart)?;
    Ok(path)
}
