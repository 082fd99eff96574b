//! The object store trait.

use crate::error::Result;

/// Bucket/key addressed blob storage.
///
/// Keys are opaque `/`-separated strings. Listing is by plain string prefix and
/// returns keys in lexicographic order.
pub trait ObjectStore {
    /// Read a whole object.
    fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;

    /// Create or replace an object.
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> Result<()>;

    /// Keys starting with `prefix`, sorted.
    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<String>>;

    /// Whether an object exists. Errors other than not-found are propagated.
    fn object_exists(&self, bucket: &str, key: &str) -> Result<bool> {
        match self.get_object(bucket, key) {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }
}
