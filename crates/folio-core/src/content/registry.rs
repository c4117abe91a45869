use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::link::LinkTarget;
use super::models::{
    CallToAction, Certificate, ContactItem, NavLink, Profile, Project, ProjectCategory, Skill,
    SocialLink,
};
use crate::section::SectionId;
use crate::{Error, Result};

/// Everything the page displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRegistry {
    pub profile: Profile,
    pub nav_links: Vec<NavLink>,
    pub skills: Vec<Skill>,
    pub certificates: Vec<Certificate>,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
    pub contact_items: Vec<ContactItem>,
    pub quick_links: Vec<NavLink>,
    /// Primary call to action of the contact section
    pub contact_cta: CallToAction,
    /// Pre-filled email composition link
    pub email_cta: CallToAction,
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentRegistry {
    /// Load content from a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let registry: Self = toml::from_str(&content)?;
        registry.validate()?;
        tracing::info!(path = %path.display(), "Loaded content file");
        Ok(registry)
    }

    /// Load from `path` when given, otherwise use the built-in content
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.nav_links.is_empty() {
            return Err(Error::Content("at least one nav link is required".into()));
        }

        if let Some(skill) = self.skills.iter().find(|s| s.percentage > 100) {
            return Err(Error::Content(format!(
                "skill '{}' has percentage {} (max 100)",
                skill.name, skill.percentage
            )));
        }

        let mut ids = HashSet::new();
        if let Some(dup) = self.certificates.iter().find(|c| !ids.insert(c.id)) {
            return Err(Error::Content(format!("duplicate certificate id {}", dup.id)));
        }

        let mut ids = HashSet::new();
        if let Some(dup) = self.projects.iter().find(|p| !ids.insert(p.id)) {
            return Err(Error::Content(format!("duplicate project id {}", dup.id)));
        }

        // Dangling fragments are tolerated at runtime, but worth a note
        for link in self.nav_links.iter().chain(&self.quick_links) {
            if let LinkTarget::Fragment(anchor) = LinkTarget::parse(&link.href) {
                if SectionId::from_anchor(&anchor).is_none() {
                    tracing::warn!(label = %link.label, href = %link.href, "Link points to no section");
                }
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn certificate(&self, id: u32) -> Option<&Certificate> {
        self.certificates.iter().find(|c| c.id == id)
    }

    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "IQBAL PRATAMA".into(),
                greeting: "HAI! SAYA".into(),
                description: "I am a 3D Designer and Web Developer passionate about creating \
                              engaging and functional digital experiences."
                    .into(),
                highlights: vec!["3D Designer".into(), "Web Developer".into()],
                about_title: "BUILDING DIGITAL EXPERIENCE".into(),
                about_code: ABOUT_CODE.into(),
                brand: "Iqbal's Digital Space".into(),
                tagline: "Design and Code That Drive Digital Experiences.".into(),
                copyright: "© 2025 Iqbal Pratama. All rights reserved.".into(),
            },
            nav_links: vec![
                nav("Home", "#home"),
                nav("About", "#about"),
                nav("Certificate", "#certificates"),
                nav("Projects", "#projects"),
                nav("Contact", "#contact"),
            ],
            skills: vec![
                skill("3D Blender", 95, "#8B5CF6", "#EC4899"),
                skill("HTML", 90, "#8B5CF6", "#A855F7"),
                skill("CSS", 85, "#8B5CF6", "#06B6D4"),
                skill("Javascript", 80, "#8B5CF6", "#F59E0B"),
            ],
            certificates: vec![
                Certificate {
                    id: 1,
                    title: "IT Essentials - Cisco".into(),
                    issuer: "Cisco Networking Academy".into(),
                    date: "2024".into(),
                    description:
                        "Achieved student level credential for completing IT Essentials course"
                            .into(),
                    image: "img/S1.jpg".into(),
                    badge: "📃".into(),
                },
                Certificate {
                    id: 2,
                    title: "UI/UX Design Competition".into(),
                    issuer: "Soegijapranata University".into(),
                    date: "2025".into(),
                    description: "Participated in UI/UX design competition".into(),
                    image: "img/S2.png".into(),
                    badge: "📃".into(),
                },
                Certificate {
                    id: 3,
                    title: "Technology for All".into(),
                    issuer: "IBM Skillsbuild".into(),
                    date: "2025".into(),
                    description: "Junior Achievement and IBM Skillsbuild partnership".into(),
                    image: "img/S3.jpg".into(),
                    badge: "📃".into(),
                },
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "School Web".into(),
                    description: "I tried to make my own version of the SMKN 7 Semarang website"
                        .into(),
                    tech: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
                    image: "img/P1.jpg".into(),
                    link: "https://github.com/Iiboyy/School-Web".into(),
                    category: ProjectCategory::Web,
                },
                Project {
                    id: 2,
                    title: "Aurora Hotel".into(),
                    description: "I created a hotel website that introduces the hotel so that \
                                  guests can book a room."
                        .into(),
                    tech: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
                    image: "img/P2.jpg".into(),
                    link: "https://github.com/Iiboyy/Aurora-Hotel".into(),
                    category: ProjectCategory::Web,
                },
                Project {
                    id: 3,
                    title: "Jetbus 5 Adi Putro Bus Custom Interior".into(),
                    description: "I created the bus interior from scratch using Blender. The \
                                  entire interior is incredibly detailed."
                        .into(),
                    tech: vec!["Blender".into()],
                    image: "img/P3.jpg".into(),
                    link: "#".into(),
                    category: ProjectCategory::ThreeD,
                },
                Project {
                    id: 4,
                    title: "MPGT Morodadi Prima Bus Interior".into(),
                    description: "I created the bus interior from scratch using Blender. The \
                                  entire interior is incredibly detailed."
                        .into(),
                    tech: vec!["Blender".into()],
                    image: "img/P4.jpg".into(),
                    link: "#".into(),
                    category: ProjectCategory::ThreeD,
                },
            ],
            social_links: vec![
                SocialLink {
                    name: "GitHub".into(),
                    url: "https://github.com/Iiboyy".into(),
                },
                SocialLink {
                    name: "Instagram".into(),
                    url: "https://www.instagram.com/iqblpra_".into(),
                },
            ],
            contact_items: vec![
                ContactItem {
                    icon: "📩".into(),
                    text: "iibrrot.15@gmail.com".into(),
                },
                ContactItem {
                    icon: "📞".into(),
                    text: "+62 812 2673 6699".into(),
                },
                ContactItem {
                    icon: "🗺".into(),
                    text: "Semarang, Jawa Tengah, Indonesia".into(),
                },
            ],
            quick_links: vec![
                nav("Home", "#home"),
                nav("About", "#about"),
                nav("Certificates", "#certificates"),
                nav("Projects", "#projects"),
                nav("Contact", "#contact"),
            ],
            contact_cta: CallToAction {
                label: "Contact Me".into(),
                href: "https://wa.me/6285175454067".into(),
            },
            email_cta: CallToAction {
                label: "Email Me".into(),
                href: "mailto:iibrrot.15@gmail.com?subject=Hello%20from%20Portfolio\
                       &body=Hi%20there!%20I%20would%20like%20to%20get%20in%20touch."
                    .into(),
            },
        }
    }
}

const ABOUT_CODE: &str = r#"const developer = {
  name: "Iqbal Pratama Wijaya",
  role: "Admin",

  skills: {
    design: ["3D Design", "UI/UX"],
    development: ["React", "JS", "CSS"],
    tools: ["Figma", "Blender", "VS Code"]
  },

  experience: "3+ years",
  status: "Available for projects"
};"#;

fn nav(label: &str, href: &str) -> NavLink {
    NavLink {
        label: label.into(),
        href: href.into(),
    }
}

fn skill(name: &str, percentage: u8, from: &str, to: &str) -> Skill {
    Skill {
        name: name.into(),
        percentage,
        colors: [from.into(), to.into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let content = ContentRegistry::builtin();
        content.validate().unwrap();
        assert_eq!(content.nav_links.len(), 5);
        assert_eq!(content.certificates.len(), 3);
        assert_eq!(content.skills[0].percentage, 95);
    }

    #[test]
    fn test_nav_links_resolve_to_sections() {
        let content = ContentRegistry::builtin();
        for link in &content.nav_links {
            let LinkTarget::Fragment(anchor) = LinkTarget::parse(&link.href) else {
                panic!("nav link {} is not a fragment", link.label);
            };
            assert!(SectionId::from_anchor(&anchor).is_some(), "{}", link.href);
        }
    }

    #[test]
    fn test_rejects_duplicate_certificate_ids() {
        let mut content = ContentRegistry::builtin();
        content.certificates[1].id = content.certificates[0].id;
        assert!(matches!(content.validate(), Err(Error::Content(_))));
    }

    #[test]
    fn test_rejects_overfull_skill() {
        let mut content = ContentRegistry::builtin();
        content.skills[0].percentage = 101;
        assert!(matches!(content.validate(), Err(Error::Content(_))));
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = std::env::temp_dir().join(format!("folio-content-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("content.toml");

        let mut content = ContentRegistry::builtin();
        content.profile.name = "SOMEONE ELSE".into();
        std::fs::write(&path, toml::to_string(&content).unwrap()).unwrap();

        let loaded = ContentRegistry::load(&path).unwrap();
        assert_eq!(loaded.profile.name, "SOMEONE ELSE");
        assert_eq!(loaded.projects, content.projects);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_json_export() {
        let json = ContentRegistry::builtin().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["projects"][2]["category"], "3d");
        assert_eq!(value["nav_links"][2]["href"], "#certificates");
    }

    #[test]
    fn test_certificate_lookup() {
        let content = ContentRegistry::builtin();
        assert_eq!(content.certificate(2).map(|c| c.issuer.as_str()), Some("Soegijapranata University"));
        assert!(content.certificate(99).is_none());
    }
}
