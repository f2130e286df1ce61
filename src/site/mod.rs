//! Portfolio site shell: routes, page content, navigation, and the
//! loading sequence.

pub mod loader;
pub mod nav;
pub mod pages;

pub use loader::{CosmicLoader, LoaderPhase};
pub use nav::NavMenu;
pub use pages::{Page, Route};
