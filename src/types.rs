//! Common types used throughout the client
//!
//! Shared type aliases used across multiple modules.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// Elements of every page of a paginated listing, in fetch order
pub type Collection = Vec<JsonValue>;
