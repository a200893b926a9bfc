//! Command-line front end configuration.

use warehouse_observability::LogFormat;

/// Environment variable holding the prompt string.
pub const PROMPT_VAR: &str = "WAREHOUSE_PROMPT";
/// Environment variable selecting `text` or `json` logs.
pub const LOG_FORMAT_VAR: &str = "WAREHOUSE_LOG_FORMAT";

/// Front end configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Printed before every line is read.
    pub prompt: String,
    /// Format of log lines written to stderr.
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl CliConfig {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// Returns the configuration plus one message per ignored value; logging
    /// is not set up yet at this point, so the caller reports them.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(reason) => {
                    ignored.push(format!("{LOG_FORMAT_VAR} ignored ({reason}); using text logs"))
                }
            }
        }

        (config, ignored)
    }
}
