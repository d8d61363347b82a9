use aws_sdk_s3::Client as S3Client;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    /// Ambient AWS config, reused for the Bedrock client.
    pub aws_config: aws_config::SdkConfig,
    pub jwt_secret: String,
    pub chat_model_id: String,
}
