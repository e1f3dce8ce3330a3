pub mod email_generator;
pub mod metrics;
pub mod providers;

pub use email_generator::EmailGenerator;
pub use metrics::{get_metrics, init_metrics};
pub use providers::{
    GeminiConfig, GeminiTextProvider, GenerationParams, MockTextProvider, ProviderError,
    TextProvider,
};
