use serde::{Deserialize, Serialize};

/// Owner details shown in the hero, about and footer sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub description: String,
    /// Words of the description rendered with the highlight style
    #[serde(default)]
    pub highlights: Vec<String>,
    pub about_title: String,
    /// Contents of the about section's code window
    pub about_code: String,
    pub brand: String,
    pub tagline: String,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100
    pub percentage: u8,
    /// Start and end colors of the skill bar (hex)
    pub colors: [String; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u32,
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    /// Image path, relative paths resolve against the assets directory
    pub image: String,
    pub badge: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "web")]
    Web,
    #[serde(rename = "3d")]
    ThreeD,
}

impl ProjectCategory {
    pub fn key(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::ThreeD => "3d",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "💻 Web Dev",
            ProjectCategory::ThreeD => "🎨 3D Design",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    pub link: String,
    pub category: ProjectCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactItem {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}
