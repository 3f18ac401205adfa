/// Runtime settings for the board.
///
/// Resolved as CLI flags over environment variables over [`Default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Panel width in terminal cells.
    pub width: u16,
    /// Emit ANSI colors.
    pub color: bool,
    /// Wipe the terminal before each redraw.
    pub clear_screen: bool,
    /// `tracing` filter directive, e.g. `warn` or `projboard=debug`.
    pub log_filter: String,
}

pub const ENV_LOG: &str = "PROJBOARD_LOG";
pub const ENV_WIDTH: &str = "PROJBOARD_WIDTH";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 60,
            color: true,
            clear_screen: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl BoardConfig {
    /// Defaults overlaid with the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`. Unparsable values are
    /// ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = lookup(ENV_LOG).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(width) = lookup(ENV_WIDTH).and_then(|w| w.trim().parse().ok()) {
            config.width = width;
        }
        // Any value, even empty, disables color (no-color.org).
        if lookup(ENV_NO_COLOR).is_some() {
            config.color = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(BoardConfig::from_lookup(lookup(&[])), BoardConfig::default());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = BoardConfig::from_lookup(lookup(&[
            (ENV_LOG, "projboard=debug"),
            (ENV_WIDTH, " 80 "),
            (ENV_NO_COLOR, ""),
        ]));
        assert_eq!(config.log_filter, "projboard=debug");
        assert_eq!(config.width, 80);
        assert!(!config.color);
    }

    #[test]
    fn bad_width_is_ignored() {
        let config = BoardConfig::from_lookup(lookup(&[(ENV_WIDTH, "wide")]));
        assert_eq!(config.width, 60);
    }
}
