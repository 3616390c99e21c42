//! Platform-agnostic navbar state, catalogs and transition data.

pub mod glyph;
pub mod menu;
pub mod motion;
pub mod nav;
pub mod platform;
pub mod scroll;
pub mod tabs;
pub mod timing;
