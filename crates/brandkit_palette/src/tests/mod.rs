//! Cross-module invariant tests over the registry and its derived maps.
