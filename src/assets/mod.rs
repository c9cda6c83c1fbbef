//! Asset Materialization Module
//!
//! Synchronizes per-user on-disk image sets (face crops, query evidence)
//! with the latest model-service response. See `reconciler` for the
//! full-replace contract.

pub mod reconciler;

pub use reconciler::{reconcile, AssetCategory, AssetItem, ReconcileError};
