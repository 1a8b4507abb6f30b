//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: Writes the speaker → score mapping to `speaker_scores.json`
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! └── speaker_scores.json
//! ```

pub mod json;
