pub mod budget;
pub mod category;
pub mod config;
pub mod expense;
pub mod report;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(report::definitions());
    commands.extend(expense::definitions());
    commands.extend(budget::definitions());
    commands.extend(category::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<i64, CommandError> {
    raw.trim()
        .trim_start_matches('#')
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a valid id")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_are_unique() {
        let definitions = all_definitions();
        let mut names: Vec<_> = definitions.iter().map(|entry| entry.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), definitions.len());
    }

    #[test]
    fn ids_accept_hash_prefix() {
        assert_eq!(parse_id("#12").unwrap(), 12);
        assert!(parse_id("twelve").is_err());
    }
}
