//! Leptos UI components for the portfolio page.
//!
//! Components only read props and signals; scrolling and fetching are
//! supplied by the host through callbacks, so the same tree renders in the
//! browser and through SSR.
//!
//! # Component Hierarchy
//!
//! ```text
//! PortfolioApp
//! ├── Loading (until the profile is ready)
//! └── PortfolioPage
//!     ├── NavBar
//!     ├── Hero                #home
//!     ├── About               #about
//!     │   ├── EducationCard
//!     │   ├── AwardsCard
//!     │   └── SkillsGrid
//!     ├── ExperienceSection   #experience
//!     ├── Projects            #projects
//!     ├── Contact             #contact
//!     └── Footer
//! ```

mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod icons;
mod layout;
mod navbar;
mod page;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use layout::{SectionHeading, TagList};
pub use navbar::{NavBar, brand_initials};
pub use page::{Loading, PortfolioApp, PortfolioPage};
pub use projects::Projects;
