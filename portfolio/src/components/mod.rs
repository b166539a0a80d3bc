//! Leptos components for the portfolio page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioDocument (static export only)
//! └── App
//!     ├── Nav
//!     │   └── NavBar
//!     │       ├── NavLinkItem (x3)
//!     │       └── MobileMenu (when open)
//!     ├── Hero          #home
//!     ├── ProjectList   #projects
//!     │   └── ProjectCard (per record)
//!     ├── About         #about
//!     └── Footer
//! ```
//!
//! Every component takes owned content, so the same tree renders in the
//! browser and through [`crate::render_page`].

mod about;
mod app;
mod document;
mod footer;
mod hero;
mod nav;
mod projects;

pub use about::About;
pub use app::App;
pub use document::PortfolioDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::{MobileMenu, Nav, NavBar, NavLinkItem};
pub use projects::{ProjectCard, ProjectList};
