/* src/server/src/render/mod.rs */

pub mod background;
pub mod layout;
pub mod slices;
