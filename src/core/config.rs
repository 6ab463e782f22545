use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub tenant_id: Option<String>,
    pub user_id: String,
    pub identity_base_url: String,
    pub graph_base_url: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub chunk_size: usize,
    pub max_messages: usize,
    pub page_size: usize,
    pub service_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        // Credentials stay optional here. A missing value surfaces as an
        // auth-config error on the first request that needs a token.
        let client_id = env::var("INBOX_CLIENT_ID").ok();
        let client_secret = env::var("INBOX_CLIENT_SECRET").ok();
        let tenant_id = env::var("INBOX_TENANT_ID").ok();
        let user_id = env::var("INBOX_USER_ID").unwrap_or_default();
        let identity_base_url = env::var("INBOX_IDENTITY_BASE_URL")
            .unwrap_or_else(|_| "https://login.microsoftonline.com".to_string());
        let graph_base_url = env::var("INBOX_GRAPH_BASE_URL")
            .unwrap_or_else(|_| "https://graph.microsoft.com/v1.0".to_string());
        let openai_api_hostname =
            env::var("INBOX_OPENAI_HOST").unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let chunk_size = env_usize("INBOX_CHUNK_SIZE", 25).max(1);
        let max_messages = env_usize("INBOX_MAX_MESSAGES", 200);
        let page_size = env_usize("INBOX_PAGE_SIZE", 50).max(1);
        let service_url = env::var("INBOX_SERVICE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

        Self {
            client_id,
            client_secret,
            tenant_id,
            user_id,
            identity_base_url,
            graph_base_url,
            openai_api_hostname,
            openai_api_key,
            openai_model,
            chunk_size,
            max_messages,
            page_size,
            service_url,
        }
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
