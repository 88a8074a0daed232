//! Cached input settings
//!
//! The dispatcher caches the handful of settings it reads every frame.
//! Configuration edits arrive as (category, key) change notifications; only
//! the named values are re-read rather than reloading the whole file.

use toml::Table;

/// Read-only access to the engine's configuration store.
pub trait SettingsSource {
    fn get_bool(&self, category: &str, key: &str) -> Option<bool>;
    fn get_float(&self, category: &str, key: &str) -> Option<f32>;
    fn get_int(&self, category: &str, key: &str) -> Option<i32>;
}

/// A [`SettingsSource`] backed by a TOML document with one table per
/// category.
pub struct TomlSettings {
    table: Table,
}

impl TomlSettings {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn from_str(content: &str) -> ember_core::Result<Self> {
        let table: Table = toml::from_str(content)?;
        Ok(Self { table })
    }

    fn value(&self, category: &str, key: &str) -> Option<&toml::Value> {
        self.table.get(category)?.as_table()?.get(key)
    }
}

impl SettingsSource for TomlSettings {
    fn get_bool(&self, category: &str, key: &str) -> Option<bool> {
        self.value(category, key)?.as_bool()
    }

    fn get_float(&self, category: &str, key: &str) -> Option<f32> {
        let value = self.value(category, key)?;
        value
            .as_float()
            .or_else(|| value.as_integer().map(|i| i as f64))
            .map(|f| f as f32)
    }

    fn get_int(&self, category: &str, key: &str) -> Option<i32> {
        self.value(category, key)?.as_integer().map(|i| i as i32)
    }
}

/// The input settings the dispatcher consults every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSettings {
    pub invert_y: bool,
    pub camera_sensitivity: f32,
    pub ui_sensitivity: f32,
    pub camera_y_multiplier: f32,
    pub ui_y_multiplier: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            invert_y: false,
            camera_sensitivity: 1.0,
            ui_sensitivity: 1.0,
            camera_y_multiplier: 1.0,
            ui_y_multiplier: 1.0,
        }
    }
}

impl InputSettings {
    /// Read every cached value from the source, falling back to defaults
    /// for anything the source does not define.
    pub fn load(source: &dyn SettingsSource) -> Self {
        let defaults = Self::default();
        Self {
            invert_y: source
                .get_bool("Input", "invert y axis")
                .unwrap_or(defaults.invert_y),
            camera_sensitivity: source
                .get_float("Input", "camera sensitivity")
                .unwrap_or(defaults.camera_sensitivity),
            ui_sensitivity: source
                .get_float("Input", "ui sensitivity")
                .unwrap_or(defaults.ui_sensitivity),
            camera_y_multiplier: source
                .get_float("Input", "camera y multiplier")
                .unwrap_or(defaults.camera_y_multiplier),
            ui_y_multiplier: source
                .get_float("Input", "ui y multiplier")
                .unwrap_or(defaults.ui_y_multiplier),
        }
    }

    /// Re-read only the values named in `changed`. Returns true when a
    /// "Video" resolution entry changed and the mouse region needs
    /// re-adjusting. Unknown pairs are ignored.
    pub fn apply_changed(
        &mut self,
        changed: &[(String, String)],
        source: &dyn SettingsSource,
    ) -> bool {
        let mut resolution_changed = false;
        for (category, key) in changed {
            match (category.as_str(), key.as_str()) {
                ("Video", "resolution x") | ("Video", "resolution y") => {
                    resolution_changed = true;
                }
                ("Input", "invert y axis") => {
                    self.invert_y = source
                        .get_bool("Input", "invert y axis")
                        .unwrap_or(self.invert_y);
                }
                ("Input", "camera sensitivity") => {
                    self.camera_sensitivity = source
                        .get_float("Input", "camera sensitivity")
                        .unwrap_or(self.camera_sensitivity);
                }
                ("Input", "ui sensitivity") => {
                    self.ui_sensitivity = source
                        .get_float("Input", "ui sensitivity")
                        .unwrap_or(self.ui_sensitivity);
                }
                _ => {}
            }
        }
        resolution_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> TomlSettings {
        TomlSettings::from_str(
            r#"
            [Input]
            "invert y axis" = true
            "camera sensitivity" = 2.5
            "ui sensitivity" = 0.5

            [Video]
            "resolution x" = 1920
            "resolution y" = 1080
            "#,
        )
        .unwrap()
    }

    #[test]
    fn load_reads_source_with_defaults() {
        let settings = InputSettings::load(&source());
        assert!(settings.invert_y);
        assert!((settings.camera_sensitivity - 2.5).abs() < 1e-6);
        assert!((settings.ui_sensitivity - 0.5).abs() < 1e-6);
        // Not in the file: defaults.
        assert!((settings.camera_y_multiplier - 1.0).abs() < 1e-6);
    }

    #[test]
    fn apply_changed_is_selective() {
        let mut settings = InputSettings::default();
        let changed = vec![("Input".to_string(), "camera sensitivity".to_string())];
        let resolution = settings.apply_changed(&changed, &source());

        assert!(!resolution);
        assert!((settings.camera_sensitivity - 2.5).abs() < 1e-6);
        // Not named in the batch, so not re-read even though the source
        // disagrees with the cache.
        assert!(!settings.invert_y);
        assert!((settings.ui_sensitivity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn resolution_change_is_reported() {
        let mut settings = InputSettings::default();
        let changed = vec![("Video".to_string(), "resolution x".to_string())];
        assert!(settings.apply_changed(&changed, &source()));
    }

    #[test]
    fn unknown_pairs_are_ignored() {
        let mut settings = InputSettings::default();
        let before = settings;
        let changed = vec![("Sound".to_string(), "master volume".to_string())];
        assert!(!settings.apply_changed(&changed, &source()));
        assert_eq!(settings, before);
    }

    #[test]
    fn toml_source_reads_ints_as_floats() {
        let source = TomlSettings::from_str("[Input]\n\"camera sensitivity\" = 3\n").unwrap();
        assert_eq!(source.get_float("Input", "camera sensitivity"), Some(3.0));
        assert_eq!(source.get_int("Input", "camera sensitivity"), Some(3));
    }
}
