// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - addiction.rs: Addiction cards, category blocks and solution tabs
// - layout.rs: Header, footer, static modals and the page shell
// - search.rs: Home page search field

pub mod addiction;
pub mod common;
pub mod layout;
pub mod search;

pub use addiction::*;
pub use common::*;
pub use layout::*;
pub use search::*;
