use aws_sdk_s3::Client;

/// Load the ambient AWS configuration (credentials chain, region, endpoint
/// overrides). Shared by every SDK client the service builds.
pub async fn load_config() -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await
}

/// Build an S3 client from a loaded configuration.
pub fn build_client(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}
