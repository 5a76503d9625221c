use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The plan the household has committed to cook next, by recipe name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedPlan {
    pub recipes: Vec<String>,
    pub executed: bool,
}

impl StagedPlan {
    pub fn new(recipes: Vec<String>) -> Self {
        Self {
            recipes,
            executed: false,
        }
    }
}

/// Read the staged plan slot.
///
/// A missing, malformed, or empty slot reads as nothing staged. Duplicate
/// recipe names collapse to their first occurrence, so a recipe staged
/// twice contributes its demand once.
pub fn load_staged_plan<P: AsRef<Path>>(path: P) -> Option<StagedPlan> {
    let content = fs::read_to_string(path).ok()?;
    let mut staged: StagedPlan = serde_json::from_str(&content).ok()?;

    let mut seen = HashSet::new();
    staged.recipes.retain(|name| seen.insert(name.trim().to_lowercase()));

    if staged.recipes.is_empty() {
        return None;
    }
    Some(staged)
}

/// Write the staged plan slot.
pub fn save_staged_plan<P: AsRef<Path>>(path: P, staged: &StagedPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(staged)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_slot_reads_as_none() {
        assert!(load_staged_plan("no_such_staged_plan.json").is_none());
    }

    #[test]
    fn test_malformed_slot_reads_as_none() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not valid json").unwrap();

        assert!(load_staged_plan(file.path()).is_none());
    }

    #[test]
    fn test_empty_recipe_list_reads_as_none() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"recipes": [], "executed": false}"#).unwrap();

        assert!(load_staged_plan(file.path()).is_none());
    }

    #[test]
    fn test_duplicate_names_collapse_on_load() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"recipes": ["Chili", "chili", "Chili", "Lemon Rice"], "executed": false}"#)
            .unwrap();

        let loaded = load_staged_plan(file.path()).unwrap();
        assert_eq!(loaded.recipes, vec!["Chili", "Lemon Rice"]);
    }

    #[test]
    fn test_roundtrip() {
        let staged = StagedPlan::new(vec!["Lemon Rice".to_string(), "Chili".to_string()]);

        let file = NamedTempFile::new().unwrap();
        save_staged_plan(file.path(), &staged).unwrap();

        let loaded = load_staged_plan(file.path()).unwrap();
        assert_eq!(loaded, staged);
        assert!(!loaded.executed);
    }
}
