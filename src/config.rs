use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub sqlite_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            sqlite_path: env::var("SQLITE_PATH")
                .unwrap_or_else(|_| "./data/campusorg.db".to_string()),
        })
    }
}
