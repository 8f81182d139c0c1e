use std::fs;
use std::path::{Path, PathBuf};

use yaml_rust2::YamlLoader;

use crate::error::SgcError;

pub struct Config {
    pub profiles: Vec<String>,
    pub output_dir: Option<PathBuf>,
}

/// Loads a YAML config file holding a `profiles` list and an optional
/// `output_dir` string.
pub fn load(path: &Path) -> Result<Config, SgcError> {
    let text = fs::read_to_string(path)
        .map_err(|e| SgcError::Config(format!("failed to read {}: {e}", path.display())))?;

    let docs = YamlLoader::load_from_str(&text)
        .map_err(|e| SgcError::Config(format!("invalid YAML in {}: {e}", path.display())))?;
    let Some(doc) = docs.first() else {
        return Err(SgcError::Config(format!("{} is empty", path.display())));
    };

    let profiles: Vec<String> = doc["profiles"]
        .as_vec()
        .ok_or_else(|| SgcError::Config("missing a 'profiles' list".to_string()))?
        .iter()
        .filter_map(|entry| entry.as_str())
        .map(str::to_string)
        .collect();
    if profiles.is_empty() {
        return Err(SgcError::Config("'profiles' list is empty".to_string()));
    }

    let output_dir = doc["output_dir"].as_str().map(PathBuf::from);

    Ok(Config {
        profiles,
        output_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_tmp(name: &str, contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_profiles_and_output_dir() {
        let path = write_tmp(
            "sgc_config_full.yaml",
            "profiles:\n  - gabe\n  - steamcommunity.com/id/other\noutput_dir: charts\n",
        );
        let config = load(&path).unwrap();
        assert_eq!(config.profiles, vec!["gabe", "steamcommunity.com/id/other"]);
        assert_eq!(config.output_dir.as_deref(), Some(Path::new("charts")));
    }

    #[test]
    fn output_dir_is_optional() {
        let path = write_tmp("sgc_config_minimal.yaml", "profiles:\n  - gabe\n");
        let config = load(&path).unwrap();
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn missing_profiles_list_is_an_error() {
        let path = write_tmp("sgc_config_empty.yaml", "output_dir: charts\n");
        assert!(matches!(load(&path), Err(SgcError::Config(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            load(Path::new("/nonexistent/sgc.yaml")),
            Err(SgcError::Config(_))
        ));
    }
}
