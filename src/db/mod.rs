use std::time::Duration;

use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use secrecy::ExposeSecret;

use crate::{config::Config, errors::AppResult};

const MAX_POOL_SIZE: u32 = 10;
const MIN_POOL_SIZE: u32 = 2;
const TIMEOUT: Duration = Duration::from_secs(5);

/// Handle on the trivia database. Cloning shares the connection pool.
#[derive(Clone)]
pub struct Database {
    inner: mongodb::Database,
}

impl Database {
    /// Connects and pings once, so a bad connection string fails at startup.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let options = client_options(config).await?;
        let inner = Client::with_options(options)?.database(&config.mongo_db_name);

        let db = Self { inner };
        db.ping().await?;
        log::info!("connected to MongoDB database '{}'", config.mongo_db_name);
        Ok(db)
    }

    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.inner.collection(name)
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.inner.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(config.mongo_conn_string.expose_secret()).await?;
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(MAX_POOL_SIZE);
    options.min_pool_size = Some(MIN_POOL_SIZE);
    options.connect_timeout = Some(TIMEOUT);
    options.server_selection_timeout = Some(TIMEOUT);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_handle_is_shareable_across_workers() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<Database>();
    }

    #[tokio::test]
    async fn client_options_apply_pool_limits() {
        let options = client_options(&Config::test_config()).await.expect("options parse");
        assert_eq!(options.max_pool_size, Some(MAX_POOL_SIZE));
        assert_eq!(options.min_pool_size, Some(MIN_POOL_SIZE));
        assert_eq!(options.app_name.as_deref(), Some(env!("CARGO_PKG_NAME")));
    }
}
