use super::models::{Project, ProjectCategory};

/// Category filter over the projects grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Filter buttons in display order
    pub const ALL: [ProjectFilter; 3] = [
        ProjectFilter::All,
        ProjectFilter::Category(ProjectCategory::Web),
        ProjectFilter::Category(ProjectCategory::ThreeD),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Category(ProjectCategory::Web) => "Web Development",
            ProjectFilter::Category(ProjectCategory::ThreeD) => "3D Design",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => project.category == *category,
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// Next filter button, wrapping around
    pub fn cycle(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;

    #[test]
    fn test_filter_by_category() {
        let content = ContentRegistry::builtin();
        assert_eq!(ProjectFilter::All.apply(&content.projects).len(), 4);

        let web = ProjectFilter::Category(ProjectCategory::Web).apply(&content.projects);
        assert_eq!(web.len(), 2);
        assert!(web.iter().all(|p| p.category == ProjectCategory::Web));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut filter = ProjectFilter::All;
        filter = filter.cycle();
        assert_eq!(filter, ProjectFilter::Category(ProjectCategory::Web));
        filter = filter.cycle();
        assert_eq!(filter, ProjectFilter::Category(ProjectCategory::ThreeD));
        assert_eq!(filter.cycle(), ProjectFilter::All);
    }
}
