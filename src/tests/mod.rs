//! Cross-module invariants checked over generated entries.
