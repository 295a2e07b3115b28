//! Media host providers
//!
//! Implementations of the [`MediaHostProvider`] port:
//!
//! - **Cloudinary**: the real upload/destroy API
//! - **Null**: no-op provider for testing and development
//!
//! [`MediaHostProvider`]: digistore_domain::ports::MediaHostProvider

mod cloudinary;
mod null;

pub use cloudinary::CloudinaryMediaProvider;
pub use null::NullMediaHostProvider;
