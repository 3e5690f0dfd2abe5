#![deny(clippy::all)]

//! Reversible source-to-source transcoder for SVG fragments embedded in
//! templating dialects (JSX, Vue, Svelte, Astro).
//!
//! An XML-only optimizer cannot be handed markup containing expression
//! braces, spread attributes, camelCase pseudo-attributes or directive
//! names. The forward pass rewrites a fragment into pure, valid XML —
//! expressions become reversible placeholder frames, dialect spellings
//! become markup spellings, directive attributes are renamed out of the
//! optimizer's reach — and the reverse pass reconstructs the original
//! syntax from the optimizer's output, byte-exact wherever the optimizer
//! left content alone.
//!
//! ```
//! use svg_transcoder::{finalize_after_optimization, prepare_for_optimization, TranscodeOptions};
//!
//! let options = TranscodeOptions::default();
//! let source = "<svg><path strokeWidth={width} /></svg>";
//! let prepared = prepare_for_optimization(source, &options);
//! assert!(prepared.was_foreign);
//!
//! // ... hand prepared.prepared_fragment to the optimizer ...
//!
//! let restored =
//!     finalize_after_optimization(&prepared.prepared_fragment, prepared.was_foreign, &options);
//! assert_eq!(restored, source);
//! ```

pub mod chars;
pub mod detector;
mod error;
pub mod extractor;
pub mod placeholder;
pub mod pipeline;
pub mod protect;
pub mod scanner;
pub mod spelling;

pub use detector::{analyze, detect, DialectSignals};
pub use error::TranscodeError;
pub use pipeline::{
    finalize_after_optimization, prepare_for_optimization, PrepareResult, TranscodeOptions,
};
pub use protect::Attribute;
