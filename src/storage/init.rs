//! Storage initialization
//!
//! First-run setup: directories, settings file and empty data files.

use tracing::info;

use crate::config::paths::HousesplitPaths;
use crate::config::settings::Settings;
use crate::error::HousesplitError;

use super::Storage;

/// Initialize storage for a fresh installation
///
/// Safe to run repeatedly: existing settings and data files are left alone.
pub fn initialize_storage(paths: &HousesplitPaths) -> Result<(), HousesplitError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    // Load then save: missing data files are created, existing ones keep
    // their content.
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    storage.save_all()?;

    info!(base_dir = %paths.base_dir().display(), "storage initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path());

        assert!(!paths.is_initialized());
        initialize_storage(&paths).unwrap();

        assert!(paths.is_initialized());
        assert!(paths.households_file().exists());
        assert!(paths.members_file().exists());
        assert!(paths.expenses_file().exists());
    }

    #[test]
    fn test_initialized_files_load_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path());
        initialize_storage(&paths).unwrap();

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        assert_eq!(storage.households.count().unwrap(), 0);
    }

    #[test]
    fn test_doesnt_overwrite_existing_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HousesplitPaths::with_base_dir(temp_dir.path());
        initialize_storage(&paths).unwrap();

        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        initialize_storage(&paths).unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap().currency_symbol, "€");
    }
}
