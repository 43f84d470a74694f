use std::collections::HashMap;
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}
impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}
pub struct ConfigValidator;
impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }
    pub fn validate_config(&self, config: &crate::BrowserConfig) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        self.validate_key_bindings(&config.keys, &mut errors, &mut warnings);
        self.validate_display_config(&config.display, &mut errors, &mut warnings);
        self.validate_home_directory(&config.home_dir, &mut errors, &mut warnings);
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
    fn validate_key_bindings(
        &self,
        keys: &crate::config::KeyBindings,
        errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        let mut seen: HashMap<char, &str> = HashMap::new();
        for (name, key) in keys.entries() {
            let field = format!("keys.{}", name);
            if key.is_control() || key.is_whitespace() {
                errors
                    .push(ValidationError {
                        field,
                        message: format!("{:?} cannot be bound", key),
                        suggestion: Some("Use a printable character".to_string()),
                    });
                continue;
            }
            if let Some(other) = seen.insert(key, name) {
                errors
                    .push(ValidationError {
                        field,
                        message: format!("'{}' is already bound to {}", key, other),
                        suggestion: Some("Give every command its own key".to_string()),
                    });
            }
        }
        if keys.quit.is_ascii_uppercase() {
            warnings
                .push(ValidationWarning {
                    field: "keys.quit".to_string(),
                    message: "Quit is bound to an uppercase letter".to_string(),
                    suggestion: Some("Caps Lock will be needed to leave".to_string()),
                });
        }
    }
    fn validate_display_config(
        &self,
        display: &crate::DisplayConfig,
        _errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        if display.reserved_rows == 0 {
            warnings
                .push(ValidationWarning {
                    field: "display.reserved_rows".to_string(),
                    message: "No row is reserved for the viewer status line".to_string(),
                    suggestion: Some("Set reserved_rows to 1".to_string()),
                });
        }
        if display.reserved_rows > 5 {
            warnings
                .push(ValidationWarning {
                    field: "display.reserved_rows".to_string(),
                    message: "Many reserved rows shrink the viewer page".to_string(),
                    suggestion: None,
                });
        }
    }
    fn validate_home_directory(
        &self,
        home_dir: &std::path::Path,
        errors: &mut Vec<ValidationError>,
        warnings: &mut Vec<ValidationWarning>,
    ) {
        if !home_dir.exists() {
            warnings
                .push(ValidationWarning {
                    field: "home_dir".to_string(),
                    message: "Home directory does not exist".to_string(),
                    suggestion: Some(
                        "Directory will be created automatically".to_string(),
                    ),
                });
        } else if !home_dir.is_dir() {
            errors
                .push(ValidationError {
                    field: "home_dir".to_string(),
                    message: "Home directory path exists but is not a directory"
                        .to_string(),
                    suggestion: Some(
                        "Choose a different path for home directory".to_string(),
                    ),
                });
        }
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    #[test]
    fn test_config_validation() {
        let validator = ConfigValidator::new();
        let mut config = crate::BrowserConfig::default();
        config.home_dir = PathBuf::from("/nonexistent/fbrowse-home");
        config.keys.copy = 'd';
        config.keys.view = ' ';
        config.display.reserved_rows = 0;
        let result = validator.validate_config(&config);
        assert!(! result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.warnings.len() >= 2);
        assert!(result.errors.iter().any(|e| e.field == "keys.copy"));
    }
    #[test]
    fn test_default_config_is_valid() {
        let config = crate::BrowserConfig::default();
        let result = ConfigValidator::new().validate_config(&config);
        assert!(result.is_valid);
    }
}
