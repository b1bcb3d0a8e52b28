/// Api service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing access tokens.
    pub access_token_secret: String,
    /// HMAC secret for signing refresh tokens. Must differ from the access
    /// secret so one token kind can never stand in for the other.
    pub refresh_token_secret: String,
    /// TCP port to listen on (default 3018). Env var: `API_PORT`.
    pub api_port: u16,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            access_token_secret: std::env::var("ACCESS_TOKEN_SECRET_KEY")
                .expect("ACCESS_TOKEN_SECRET_KEY"),
            refresh_token_secret: std::env::var("REFRESH_TOKEN_SECRET_KEY")
                .expect("REFRESH_TOKEN_SECRET_KEY"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3018),
        }
    }
}
