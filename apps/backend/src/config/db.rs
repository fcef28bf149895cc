use std::time::Duration;

use sea_orm::ConnectOptions;

/// Pool settings for the application connection.
pub fn connect_options(database_url: &str) -> ConnectOptions {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.min_connections(1)
        .max_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    opt
}
