// Cover-letter generation: style tables, prompt building, the provider gateway
// and its HTTP handlers. All model calls go through llm_client.

pub mod gateway;
pub mod handlers;
pub mod prompts;
pub mod style;
