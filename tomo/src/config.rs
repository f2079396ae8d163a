use serde::Deserialize;
use std::env;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub recommend: RecommendConfig,
}

/// Where the loaders find their inputs. Both files must come out of the same
/// dataset build so that row order lines up.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub catalog_path: String,
    pub similarity_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    /// How many books to return when the caller does not say.
    pub default_top_n: usize,
    /// Minimum normalized similarity for a fuzzy genre suggestion.
    pub match_cutoff: f64,
    /// Maximum number of fuzzy genre suggestions.
    pub match_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            data: DataConfig {
                catalog_path: env::var("TOMO_CATALOG_PATH")
                    .unwrap_or_else(|_| "data/catalog.csv".to_string()),
                similarity_path: env::var("TOMO_SIMILARITY_PATH")
                    .unwrap_or_else(|_| "data/similarity.json".to_string()),
            },
            recommend: RecommendConfig {
                default_top_n: parse_env_or("TOMO_DEFAULT_TOP_N", 10),
                match_cutoff: parse_env_or("TOMO_MATCH_CUTOFF", 0.3),
                match_limit: parse_env_or("TOMO_MATCH_LIMIT", 10),
            },
        }
    }
}
