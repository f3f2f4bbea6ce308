//! `hero-oracle` — mantra and mythos generation for Hero Frequency.
//!
//! The reveal stages of a journey need personalized text: four power mantras
//! and a seven-part hero's-journey story. This crate owns that concern so
//! `hero-core` stays free of generation and transport details.
//!
//! # Architecture
//!
//! ```text
//! FrequencySignature   ← built from a journey's HeroData once gates exist
//!     │
//!     ▼
//! dyn Oracle           ← ScriptedOracle (offline templates)
//!     │                  RemoteOracle   (POST /v1/mantras, /v1/mythos)
//!     ▼
//! Mantras / StoryArc   ← hero-core wire types, validated on deserialize
//! ```
//!
//! A failing oracle never fails a journey: [`fallback::mantras_or_fallback`]
//! and [`fallback::mythos_or_fallback`] substitute generic content after a
//! single attempt and report the error to the caller.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hero_oracle::{fallback, FrequencySignature, Oracle, ScriptedOracle};
//!
//! let signature = FrequencySignature::from_hero(controller.data())
//!     .ok_or(HeroError::JourneyIncomplete)?;
//! let mantras = fallback::mantras_or_fallback(&ScriptedOracle, &signature, |e| {
//!     tracing::warn!(error = %e, "oracle unavailable, using generic mantras");
//! });
//! ```

pub mod error;
pub mod fallback;
pub mod remote;
pub mod scripted;
pub mod types;

pub use error::OracleError;
pub use remote::RemoteOracle;
pub use scripted::ScriptedOracle;
pub use types::FrequencySignature;

use hero_core::hero::{Mantras, StoryArc};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, OracleError>;

/// A source of personalized journey content.
///
/// Implementations are synchronous; callers that need async wrap the call in
/// a blocking task.
pub trait Oracle {
    /// Four power mantras tuned to the signature.
    fn mantras(&self, signature: &FrequencySignature) -> Result<Mantras>;

    /// The seven-part hero's-journey story tuned to the signature.
    fn mythos(&self, signature: &FrequencySignature) -> Result<StoryArc>;
}
