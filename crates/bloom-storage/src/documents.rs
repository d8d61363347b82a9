//! Typed JSON-document access on top of the raw object operations.
//!
//! Route handlers work in terms of domain types; this module owns the
//! serde boundary.

use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON document. Returns the deserialized value and its ETag.
pub async fn load<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(T, String), StorageError> {
    let output = objects::get_object(client, bucket, key).await?;
    let value: T = serde_json::from_slice(&output.body)?;
    let etag = output.etag.unwrap_or_default();
    Ok((value, etag))
}

/// Save a JSON document. Returns the new ETag.
pub async fn save<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    objects::put_object(client, bucket, key, body, Some("application/json")).await
}

/// Save a JSON document with ETag optimistic locking.
pub async fn save_if_match<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    expected_etag: &str,
) -> Result<String, StorageError> {
    let body = serde_json::to_vec(value)?;
    objects::put_object_if_match(
        client,
        bucket,
        key,
        body,
        Some("application/json"),
        expected_etag,
    )
    .await
}

/// Load every JSON document under a prefix.
///
/// A full list-then-get scan. Fine at campus scale; anything hotter would
/// want a real index in front of it.
pub async fn load_all<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = objects::list_objects(client, bucket, prefix).await?;

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        let output = objects::get_object(client, bucket, key).await?;
        values.push(serde_json::from_slice(&output.body)?);
    }

    Ok(values)
}
