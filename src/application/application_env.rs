use anyhow::anyhow;
use axum::http::HeaderValue;
use std::{net::SocketAddr, str::FromStr};
use strum::EnumString;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub storage: StorageEnv,

    pub max_http_content_len: usize,

    pub seats_load_threshold: usize,
    pub reservation_max_rounds: u32,

    pub cors_allowed_origin: Option<HeaderValue>,
}

pub enum StorageEnv {
    MongoDb {
        connection_string: String,
        name: String,
    },
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
enum StorageKind {
    MongoDb,
    Memory,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("BOOKIT_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("BOOKIT_LOG_FILENAME")?;
        let bind_address = Self::env_var("BOOKIT_BIND_ADDRESS")?.parse()?;
        let storage = Self::parse_storage()?;
        let max_http_content_len = Self::env_var("BOOKIT_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let seats_load_threshold = Self::env_var("BOOKIT_SEATS_LOAD_THRESHOLD")?.parse()?;
        let reservation_max_rounds = Self::env_var("BOOKIT_RESERVATION_MAX_ROUNDS")?.parse()?;
        if reservation_max_rounds == 0 {
            return Err(anyhow!("BOOKIT_RESERVATION_MAX_ROUNDS must be at least 1"));
        }
        let cors_allowed_origin = std::env::var("BOOKIT_CORS_ALLOWED_ORIGIN")
            .ok()
            .map(|origin| origin.parse::<HeaderValue>())
            .transpose()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            storage,
            max_http_content_len,
            seats_load_threshold,
            reservation_max_rounds,
            cors_allowed_origin,
        })
    }

    fn parse_storage() -> anyhow::Result<StorageEnv> {
        let kind = Self::env_var("BOOKIT_STORAGE")?;
        let kind = StorageKind::from_str(&kind)
            .map_err(|_| anyhow!("BOOKIT_STORAGE must be one of: mongodb, memory"))?;

        let storage = match kind {
            StorageKind::MongoDb => StorageEnv::MongoDb {
                connection_string: Self::env_var("BOOKIT_DB_CONNECTION_STRING")?,
                name: Self::env_var("BOOKIT_DB_NAME")?,
            },
            StorageKind::Memory => StorageEnv::Memory,
        };

        Ok(storage)
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
