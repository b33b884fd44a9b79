/* src/content/src/lib.rs */

pub mod client;
pub mod queries;
pub mod views;

pub use client::{ContentClient, DocumentStore};
pub use queries::{
  get_all_blogs, get_all_pages, get_blog, get_contact_copy, get_navigation, get_page,
  get_settings,
};
pub use views::{NavItem, Navigation, Settings};
