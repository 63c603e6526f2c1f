use aws_sdk_s3::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::objects;

const JSON_CONTENT_TYPE: &str = "application/json";

pub async fn load_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let body = objects::get_object(client, bucket, key).await?;
    Ok(serde_json::from_slice(&body)?)
}

pub async fn save_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(client, bucket, key, body, JSON_CONTENT_TYPE).await
}
