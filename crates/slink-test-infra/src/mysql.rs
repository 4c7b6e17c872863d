use crate::Result;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const MYSQL_PORT: u16 = 3306;
const DEFAULT_TAG: &str = "8.4";

/// Overrides the MySQL image tag used by integration tests.
pub const MYSQL_TAG_ENV: &str = "SLINK_TEST_MYSQL_TAG";

/// Settings for a disposable MySQL server.
///
/// The server runs with a binary utf8mb4 collation, so short codes and URLs
/// compare byte-for-byte just like the production tables.
#[derive(Debug, TypedBuilder)]
pub struct MysqlConfig {
    #[builder(default = "slink".to_string(), setter(into))]
    database: String,
    #[builder(default = "slink".to_string(), setter(into))]
    username: String,
    #[builder(default = "slink".to_string(), setter(into))]
    password: String,
    /// Image tag; falls back to `SLINK_TEST_MYSQL_TAG`, then `8.4`.
    #[builder(default = tag_from_env(), setter(into))]
    tag: String,
}

fn tag_from_env() -> String {
    std::env::var(MYSQL_TAG_ENV).unwrap_or_else(|_| DEFAULT_TAG.to_string())
}

/// Test fixture for a disposable MySQL server.
///
/// The container is stopped and removed when the fixture is dropped.
pub struct MySqlServer {
    container: ContainerAsync<GenericImage>,
    config: MysqlConfig,
}

impl MySqlServer {
    pub async fn new(config: MysqlConfig) -> Result<Self> {
        let container = GenericImage::new("mysql", config.tag.as_str())
            .with_exposed_port(MYSQL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stderr("ready for connections"))
            .with_cmd([
                "--character-set-server=utf8mb4",
                "--collation-server=utf8mb4_bin",
            ])
            .with_env_var("MYSQL_DATABASE", config.database.as_str())
            .with_env_var("MYSQL_USER", config.username.as_str())
            .with_env_var("MYSQL_PASSWORD", config.password.as_str())
            .with_env_var("MYSQL_ROOT_PASSWORD", "root")
            .start()
            .await?;

        Ok(Self { container, config })
    }

    /// Image tag the server was started from.
    pub fn tag(&self) -> &str {
        &self.config.tag
    }

    /// A `mysql://` DSN for the test database.
    pub async fn database_url(&self) -> Result<String> {
        let host = self.container.get_host().await?;
        let port = self.container.get_host_port_ipv4(MYSQL_PORT).await?;
        Ok(format!(
            "mysql://{}:{}@{}:{}/{}",
            self.config.username, self.config.password, host, port, self.config.database
        ))
    }
}
