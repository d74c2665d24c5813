pub mod credentials;
pub mod dispatcher;
pub mod metrics;
pub mod model_map;
pub mod replicate;

pub use credentials::CredentialSource;
pub use model_map::{ModelMap, IMAGE_MODEL_MAP, MODEL_MAP};
pub use replicate::{extract_video_url, PredictionInput, ProviderError, ReplicateClient};
