//! App shell components: PageShell, Header, Footer
//!
//! The shell composes the page layout around the signals grid.

mod footer;
mod header;
mod page_shell;

pub use footer::Footer;
pub use header::Header;
pub use page_shell::PageShell;
