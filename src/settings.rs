use color_eyre::eyre::{Result, WrapErr, eyre};
use fpl_core::{SelectorSettings, ShortlistPolicy, SquadRulesConfig};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// How the selected transfer is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Log,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "log" => Ok(OutputFormat::Log),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("OUTPUT must be 'log' or 'json', got '{}'", s)),
        }
    }
}

/// Runtime options read from environment variables.
#[derive(Debug)]
pub struct AppSettings {
    /// Snapshot file; the bundled snapshot is used when absent.
    pub snapshot: Option<PathBuf>,
    pub seed: Option<u32>,
    pub transfers: u8,
    pub output: OutputFormat,
    pub rules: SquadRulesConfig,
    pub selector: SelectorSettings,
}

impl AppSettings {
    pub fn from_env() -> Result<Self> {
        let defaults = SelectorSettings::default();
        let rules = SquadRulesConfig::default();

        let shortlist_policy = match env::var("SHORTLIST").ok().as_deref() {
            None | Some("clamp") => ShortlistPolicy::Clamp,
            Some("fail") => ShortlistPolicy::Fail,
            Some(other) => {
                return Err(eyre!("SHORTLIST must be 'clamp' or 'fail', got '{}'", other));
            }
        };

        let output = match env::var("OUTPUT") {
            Ok(value) => value.parse::<OutputFormat>().map_err(|e| eyre!(e))?,
            Err(_) => OutputFormat::default(),
        };

        Ok(AppSettings {
            snapshot: env::var("SNAPSHOT").ok().map(PathBuf::from),
            seed: parse_var("SEED")?,
            transfers: parse_var("TRANSFERS")?.unwrap_or(1),
            output,
            rules: SquadRulesConfig {
                max_players_per_club: parse_var("MAX_PER_CLUB")?
                    .unwrap_or(rules.max_players_per_club),
                ..rules
            },
            selector: SelectorSettings {
                selection_window: parse_var("WINDOW")?.unwrap_or(defaults.selection_window),
                shortlist_policy,
            },
        })
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .wrap_err_with(|| format!("{} has invalid value '{}'", name, value)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parses_known_values() {
        assert_eq!("log".parse::<OutputFormat>(), Ok(OutputFormat::Log));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
