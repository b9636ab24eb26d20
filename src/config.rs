use toml::Table;
use toml::Value;

const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

fn _expand_homedir(path: String) -> String {
    // Paths without a leading `~`, or with no resolvable home dir, pass
    // through untouched.
    match (path.strip_prefix('~'), home::home_dir()) {
        (Some(rest), Some(home_dir)) => format!("{}{}", home_dir.display(), rest),
        _ => path,
    }
}

pub struct Config {
    backend_url: String,
    request_timeout_secs: u64,
    log_file: Option<String>,
}

impl Config {
    /// Missing keys and wrong-typed values alike fall back to defaults.
    pub fn new(config: toml::Table) -> Self {
        let backend_url = config
            .get("backend_url")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_owned();

        let request_timeout_secs = config
            .get("request_timeout_secs")
            .and_then(|v| v.as_integer())
            .map(|v| v as u64)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        let log_file = config
            .get("log_file")
            .and_then(|v| v.as_str())
            .map(|v| _expand_homedir(v.to_owned()));

        Config {
            backend_url,
            request_timeout_secs,
            log_file,
        }
    }

    pub fn generate() -> Table {
        let mut table = Table::new();
        table.insert(
            String::from("backend_url"),
            Value::String(String::from(DEFAULT_BACKEND_URL)),
        );
        table.insert(
            String::from("request_timeout_secs"),
            Value::Integer(DEFAULT_REQUEST_TIMEOUT_SECS as i64),
        );
        table.insert(
            String::from("log_file"),
            Value::String(String::from("~/.restnotes.log")),
        );

        table
    }

    pub fn get_backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn get_request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
    }

    pub fn get_log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    pub fn set_backend_url(&mut self, backend_url: String) {
        self.backend_url = backend_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_falls_back_to_defaults() {
        let config = Config::new(Table::new());
        assert_eq!(config.get_backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(config.get_request_timeout_secs(), DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(config.get_log_file().is_none());
    }

    #[test]
    fn values_from_table_win() {
        let table = "backend_url = \"http://notes.local:4000\"\nrequest_timeout_secs = 3\n"
            .parse::<Table>()
            .unwrap();
        let config = Config::new(table);
        assert_eq!(config.get_backend_url(), "http://notes.local:4000");
        assert_eq!(config.get_request_timeout_secs(), 3);
    }

    #[test]
    fn wrong_typed_values_fall_back_to_defaults() {
        let table = "backend_url = 123\nrequest_timeout_secs = \"soon\"\nlog_file = 7\n"
            .parse::<Table>()
            .unwrap();
        let config = Config::new(table);
        assert_eq!(config.get_backend_url(), DEFAULT_BACKEND_URL);
        assert_eq!(config.get_request_timeout_secs(), DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(config.get_log_file().is_none());
    }

    #[test]
    fn homedir_expansion_only_touches_tilde_paths() {
        assert_eq!(
            _expand_homedir(String::from("/var/log/notes.log")),
            "/var/log/notes.log"
        );
        let expanded = _expand_homedir(String::from("~/notes.log"));
        assert!(expanded.ends_with("/notes.log"));
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn generated_table_parses_back() {
        let config = Config::new(Config::generate());
        assert_eq!(config.get_backend_url(), DEFAULT_BACKEND_URL);
        assert!(config.get_log_file().is_some());
    }
}
