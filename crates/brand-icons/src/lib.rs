#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Brand icons for Yew front-ends.
//!
//! Layout: `attributes.rs` (caller attribute model), `glyph.rs` (element tree,
//! merge order and static markup), `icons/` (Yew props and components).

pub mod attributes;
pub mod error;
pub mod glyph;
pub mod icons;

pub use attributes::{IconAttributes, canonical_name};
pub use error::{AttributeError, AttributeResult};
pub use glyph::{ElementSpec, IconDefinition, SVG_NAMESPACE, SvgElement};
pub use icons::tiktok::{TIKTOK, TIKTOK_PATH, TikTokIcon, tiktok_markup};
pub use icons::{IconProps, icon_svg};
