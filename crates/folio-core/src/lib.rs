pub mod config;
pub mod content;
pub mod error;
pub mod gradient;
pub mod section;

pub use config::{AppConfig, EasingType, ScrollConfig, TypewriterConfig};
pub use content::{Certificate, ContentRegistry, LinkTarget, Project, ProjectFilter, Skill};
pub use error::{Error, Result};
pub use gradient::{ColorStop, GradientDescriptor, GradientSampler, PointerPosition, Rgb};
pub use section::{SectionId, StaggerSpec};
