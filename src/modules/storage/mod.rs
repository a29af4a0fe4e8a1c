//! Storage module for uploaded images
//!
//! Provides a local-disk upload store and public URL generation for the
//! files it holds.

mod upload_storage;

pub use upload_storage::UploadStorage;
