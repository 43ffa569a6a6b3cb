use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_origins: Vec<String>,
    pub razorpay_key_secret: SecretString,
    pub admin_username: String,
    pub admin_password: SecretString,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "examprep-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            razorpay_key_secret: SecretString::from(
                env::var("RAZORPAY_KEY_SECRET")
                    .unwrap_or_else(|_| "dev_razorpay_secret_change_in_production".to_string()),
            ),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: SecretString::from(
                env::var("ADMIN_PASSWORD")
                    .unwrap_or_else(|_| "dev_admin_password_change_in_production".to_string()),
            ),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let razorpay_secret = self.razorpay_key_secret.expose_secret();
        let admin_password = self.admin_password.expose_secret();

        if razorpay_secret == "dev_razorpay_secret_change_in_production" {
            panic!(
                "FATAL: RAZORPAY_KEY_SECRET is using default value! Set RAZORPAY_KEY_SECRET environment variable to the gateway key secret."
            );
        }

        if admin_password == "dev_admin_password_change_in_production" {
            panic!(
                "FATAL: ADMIN_PASSWORD is using default value! Set ADMIN_PASSWORD environment variable."
            );
        }

        if admin_password.len() < 12 {
            panic!(
                "FATAL: ADMIN_PASSWORD is too short ({}). Must be at least 12 characters.",
                admin_password.len()
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "examprep-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_origins: vec!["*".to_string()],
            razorpay_key_secret: SecretString::from("test_razorpay_secret".to_string()),
            admin_username: "admin".to_string(),
            admin_password: SecretString::from("test_admin_password".to_string()),
        }
    }
}
