/// Default model used for structured extraction.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_TOP_P: f64 = 1.0;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2000;

/// Connection and sampling settings for the analysis API.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
    pub max_output_tokens: u32,
    /// Base URL without a trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
}

impl OpenAiConfig {
    /// Build a configuration with default model and sampling parameters.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default                      |
    /// |----------------------------|----------|------------------------------|
    /// | `OPENAI_API_KEY`           | **yes**  | --                           |
    /// | `OPENAI_MODEL`             | no       | `gpt-4o-mini`                |
    /// | `OPENAI_TEMPERATURE`       | no       | `0.7`                        |
    /// | `OPENAI_TOP_P`             | no       | `1.0`                        |
    /// | `OPENAI_MAX_OUTPUT_TOKENS` | no       | `2000`                       |
    /// | `OPENAI_BASE_URL`          | no       | `https://api.openai.com/v1`  |
    ///
    /// # Panics
    ///
    /// Panics if `OPENAI_API_KEY` is missing or empty, or a numeric
    /// variable does not parse.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .expect("OPENAI_API_KEY must be set in the environment");
        assert!(!api_key.is_empty(), "OPENAI_API_KEY must not be empty");

        let mut config = Self::new(api_key);

        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }
        if let Ok(value) = std::env::var("OPENAI_TEMPERATURE") {
            config.temperature = value
                .parse()
                .expect("OPENAI_TEMPERATURE must be a valid f64");
        }
        if let Ok(value) = std::env::var("OPENAI_TOP_P") {
            config.top_p = value.parse().expect("OPENAI_TOP_P must be a valid f64");
        }
        if let Ok(value) = std::env::var("OPENAI_MAX_OUTPUT_TOKENS") {
            config.max_output_tokens = value
                .parse()
                .expect("OPENAI_MAX_OUTPUT_TOKENS must be a valid u32");
        }
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        config
    }
}
