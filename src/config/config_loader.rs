use anyhow::Result;

use super::config_model::{Database, DodoPayments, DotEnvyConfig, Server};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let database = Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let dodo = DodoPayments {
        api_key: std::env::var("DODO_API_KEY").expect("DODO_API_KEY is invalid"),
        base_url: std::env::var("DODO_BASE_URL")
            .unwrap_or_else(|_| "https://test.dodopayments.com".to_string()),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        dodo,
    })
}
