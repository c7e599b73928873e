//! Centralized constants for the configuration store.
//!
//! This module contains the reserved characters, tokens and environment
//! variable names shared by the parser, resolver and loader.

// =============================================================================
// Key Paths
// =============================================================================

/// Default separator between segments of a nested key path.
pub const DEFAULT_SEPARATOR: char = '.';

/// Characters that may not appear in INI section names or keys.
pub const INI_RESERVED_CHARS: &[char] = &['[', ']', '#', ';', '='];

/// Characters that may never be used as a key path separator.
pub const FORBIDDEN_SEPARATORS: &[char] = &['_', '-'];

// =============================================================================
// Value Rendering
// =============================================================================

/// Rendering of a null value when stringified.
pub const NULL_TOKEN: &str = "<nil>";

/// Prefix used when a nested map is stringified.
pub const MAP_TOKEN: &str = "map";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable that disables `.env` preloading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
