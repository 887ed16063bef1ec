//! Presentation settings threaded through every formatting call

use std::env;

use crate::format::MAX_VALUE_LEN;

/// Presentation settings for failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Show full file paths in caller frames instead of the basename
    pub show_full_path: bool,
    /// Decorate labels with ANSI colors
    pub enable_color: bool,
    /// Ceiling for a single formatted value before truncation
    pub max_value_len: usize,
    /// Stack frames to skip before collecting callers
    pub caller_skip: usize,
    /// Stack frames to inspect after the skipped ones
    pub caller_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_full_path: true,
            enable_color: true,
            max_value_len: MAX_VALUE_LEN,
            caller_skip: 2,
            caller_depth: 3,
        }
    }
}

impl Config {
    /// Defaults adjusted by `NO_COLOR` and `ASSERTKIT_SHORT_PATH`
    pub fn from_env() -> Self {
        Self::default()
            .with_color(!env_flag("NO_COLOR"))
            .with_full_path(!env_flag("ASSERTKIT_SHORT_PATH"))
    }

    pub fn with_color(mut self, enable: bool) -> Self {
        self.enable_color = enable;
        self
    }

    pub fn with_full_path(mut self, show: bool) -> Self {
        self.show_full_path = show;
        self
    }

    pub fn with_max_value_len(mut self, max_len: usize) -> Self {
        self.max_value_len = max_len;
        self
    }

    pub fn with_caller_window(mut self, skip: usize, depth: usize) -> Self {
        self.caller_skip = skip;
        self.caller_depth = depth;
        self
    }

    /// Settings suited to tests: no color, basenames only
    pub fn plain() -> Self {
        Self::default().with_color(false).with_full_path(false)
    }
}

fn env_flag(name: &str) -> bool {
    env::var_os(name).is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.show_full_path);
        assert!(config.enable_color);
        assert_eq!(config.max_value_len, MAX_VALUE_LEN);
        assert_eq!((config.caller_skip, config.caller_depth), (2, 3));
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_color(false)
            .with_full_path(false)
            .with_max_value_len(10)
            .with_caller_window(0, 8);
        assert_eq!(config, Config {
            show_full_path: false,
            enable_color: false,
            max_value_len: 10,
            caller_skip: 0,
            caller_depth: 8,
        });
        assert_ne!(Config::plain(), Config::default());
    }
}
