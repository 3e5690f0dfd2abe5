//! Forward/reverse entry points.
//!
//! `prepare_for_optimization` runs detection and, for foreign fragments,
//! the extract -> normalize -> protect stages; the caller then feeds the
//! prepared fragment to its XML optimizer. `finalize_after_optimization`
//! inverts the stages in exactly the reverse order: protection must be
//! undone before spelling denormalization, because protected names are
//! not valid spelling-map keys. Threading `was_foreign` back unchanged is
//! the caller's half of the round-trip contract; a caller that skips the
//! optimizer entirely still gets a byte-exact round trip.

use serde::{Deserialize, Serialize};

use crate::detector;
use crate::error::TranscodeError;
use crate::extractor;
use crate::protect;
use crate::spelling;

/// Policy knobs, handed across the host's JSON boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranscodeOptions {
    /// Treat the input as JSX-style (camelCase attribute spellings).
    /// Off for Vue/Svelte/Astro input, where the markup spellings are
    /// already in use and protection alone shields the directives.
    pub use_camel_case: bool,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        TranscodeOptions {
            use_camel_case: true,
        }
    }
}

impl TranscodeOptions {
    /// Parse options from the host. `{}` yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, TranscodeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Output of the forward pass. `was_foreign` must be threaded back into
/// [`finalize_after_optimization`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareResult {
    pub prepared_fragment: String,
    pub was_foreign: bool,
}

/// Forward pass: produce a syntactically valid, pure-XML fragment the
/// optimizer can safely rewrite. A fragment with no foreign syntax is
/// returned exactly as given.
pub fn prepare_for_optimization(fragment: &str, options: &TranscodeOptions) -> PrepareResult {
    if !detector::detect(fragment) {
        return PrepareResult {
            prepared_fragment: fragment.to_string(),
            was_foreign: false,
        };
    }
    let extracted = extractor::extract(fragment, options.use_camel_case);
    let normalized = spelling::normalize(&extracted, options.use_camel_case);
    PrepareResult {
        prepared_fragment: protect::protect(&normalized),
        was_foreign: true,
    }
}

/// Reverse pass: reconstruct the embedding-dialect fragment from the
/// optimizer's output. For `was_foreign == false` the input is returned
/// untouched — the optimizer's output for plain markup is never second-
/// guessed.
pub fn finalize_after_optimization(
    optimized_fragment: &str,
    was_foreign: bool,
    options: &TranscodeOptions,
) -> String {
    if !was_foreign {
        return optimized_fragment.to_string();
    }
    let unprotected = protect::unprotect(optimized_fragment);
    let denormalized = spelling::denormalize(&unprotected, options.use_camel_case);
    extractor::restore(&denormalized, options.use_camel_case)
}
