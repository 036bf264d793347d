use serde::{Deserialize, Serialize};

// ===== SESSION TYPES =====

/// Signed-in user record. The shell treats it as opaque and only hands it
/// to the header's user display; pages interpret the rest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
}

// ===== STATIC SHELL CONFIG =====

/// Static application configuration, loaded once at startup.
///
/// `open_pages` lists the pathnames reachable without authentication;
/// they bypass the authenticated layout entirely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub app_name: String,
    pub footer_text: String,
    pub open_pages: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "Crater Admin".to_owned(),
            footer_text: "Crater Admin".to_owned(),
            open_pages: vec!["/sign_in".to_owned(), "/sign_up".to_owned()],
        }
    }
}

impl ShellConfig {
    /// Parse the embedded `shell.toml`. A malformed file degrades to the
    /// built-in defaults instead of failing startup.
    pub fn load() -> Self {
        toml::from_str(include_str!("../shell.toml")).unwrap_or_default()
    }

    pub fn is_open_page(&self, pathname: &str) -> bool {
        self.open_pages.iter().any(|page| page == pathname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = ShellConfig::load();
        assert!(!config.app_name.is_empty());
        assert!(config.is_open_page("/sign_in"));
        assert!(config.is_open_page("/sign_up"));
        assert!(!config.is_open_page("/user"));
    }

    #[test]
    fn open_page_lookup_is_exact() {
        let config = ShellConfig::default();
        assert!(!config.is_open_page("/sign_in/"));
        assert!(!config.is_open_page("sign_in"));
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = User { name: "admin".to_owned() };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(serde_json::from_str::<User>(&json).unwrap(), user);
    }
}
