//! Resize pipeline components.
//!
//! This module contains all the stages of the batch pipeline:
//! - **discovery**: Classify the input root and walk it for files
//! - **filter**: Extension allow-list (or force-all) policy
//! - **naming**: Derive destination paths from source paths
//! - **decode**: Decode source images, detecting the format from content
//! - **resize**: Target-geometry calculation and resampling
//! - **encode**: Write images back in their source container format
//! - **job**: One file through open → decode → resize → encode
//! - **runner**: Orchestrates a batch with the fatal/recoverable policy

pub mod decode;
pub mod discovery;
pub mod encode;
pub mod filter;
pub mod job;
pub mod naming;
pub mod resize;
pub mod runner;

// Re-exports for convenient access
pub use decode::{DecodedImage, ImageDecoder};
pub use discovery::{classify, DiscoveredFile, FileDiscovery, PathKind};
pub use encode::Encoder;
pub use filter::ExtensionFilter;
pub use job::ResizeJob;
pub use naming::OutputNamer;
pub use resize::{target_dimensions, Resizer};
pub use runner::{BatchPlan, BatchRunner};
