#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logplus-sink` provides the file-sink building blocks used by the
//! `logplus` logger: a [`SinkConfig`] value object describing a destination
//! directory, a [`HandleFactory`] that opens a fresh append handle for a
//! caller-determined path, and the [`SinkHandle`] returned by the factory.
//!
//! # Design
//!
//! Handles are deliberately transient. Every duplication event in the logger
//! above opens its own handle, appends a single rendered line, and drops the
//! handle again, so no descriptor outlives the emission that created it. The
//! factory therefore makes no caching promise: callers that want handle reuse
//! must cache externally.
//!
//! # Invariants
//!
//! - [`HandleFactory::handle_for`] opens files in create+append mode and
//!   never truncates existing content.
//! - [`SinkHandle`] writes a rendered line with a single `write_all` followed
//!   by a flush, so concurrent writers through separate handles never
//!   interleave partial lines on POSIX append semantics.
//! - Dropping a [`SinkHandle`] closes the underlying file on every exit path,
//!   including when a write failed.
//!
//! # Errors
//!
//! All fallible operations return [`SinkError`], which preserves the failing
//! path alongside the underlying [`std::io::Error`].

mod config;
mod error;
mod factory;
mod handle;

pub use config::SinkConfig;
pub use error::SinkError;
pub use factory::HandleFactory;
pub use handle::SinkHandle;
