/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Options {
    pub host: String,
    pub port: String,
    /// Public base URL used when composing shareable links.
    pub base_url: String,
    pub db_path: String,
    pub load_examples: bool,
    /// The sandbox pulls editor assets from a CDN, so it is opt-in.
    pub use_sandbox: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: "8083".into(),
            base_url: "http://localhost:8083".into(),
            db_path: "/tmp/petrilink.db".into(),
            load_examples: true,
            use_sandbox: false,
        }
    }
}

impl Options {
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// `HOST`, `PORT`, `URL_BASE`, `DB_PATH` override their defaults;
    /// `USE_SANDBOX` enables the sandbox by being set at all;
    /// `LOAD_EXAMPLES=0` (or `false`) skips seed models.
    fn resolve(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(host) = get("HOST") {
            options.host = host;
        }
        if let Some(port) = get("PORT") {
            options.port = port;
        }
        if let Some(base_url) = get("URL_BASE") {
            options.base_url = base_url;
        }
        if let Some(db_path) = get("DB_PATH") {
            options.db_path = db_path;
        }
        if get("USE_SANDBOX").is_some() {
            options.use_sandbox = true;
        }
        if let Some(value) = get("LOAD_EXAMPLES") {
            options.load_examples = !matches!(value.as_str(), "0" | "false");
        }
        options
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
