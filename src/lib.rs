//! Waveform peak extraction service.
//!
//! Resolves a track request into a normalized sequence of waveform peaks,
//! sourcing the audio from a remote content service (with a local download
//! cache) or from the cache alone, and delegating decoding to an
//! audio-analysis port.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
