//! Folio application library
//!
//! Two catalog services (books, photographers) built as instances of the
//! generic collection contract from `folio-catalog`.

pub mod modules;
