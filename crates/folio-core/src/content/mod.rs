mod filter;
mod link;
mod models;
mod registry;

pub use filter::ProjectFilter;
pub use link::LinkTarget;
pub use models::{
    CallToAction, Certificate, ContactItem, NavLink, Profile, Project, ProjectCategory, Skill,
    SocialLink,
};
pub use registry::ContentRegistry;
