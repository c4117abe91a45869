use anyhow::Result;

use folio_core::{AppConfig, ContentRegistry, LinkTarget};

pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let content = ContentRegistry::load_or_builtin(config.content_file().as_deref())?;

    if json {
        println!("{}", content.to_json()?);
        return Ok(());
    }

    let profile = &content.profile;
    println!("{} - {}", profile.name, profile.tagline);
    println!("\nSections:");
    for link in &content.nav_links {
        println!("  {:<14} {}", link.label, link.href);
    }

    println!("\nSkills ({}):", content.skills.len());
    for skill in &content.skills {
        println!("  {:<14} {:>3}%", skill.name, skill.percentage);
    }

    println!("\nCertificates ({}):", content.certificates.len());
    for cert in &content.certificates {
        println!("  [{}] {} - {}, {}", cert.id, cert.title, cert.issuer, cert.date);
        println!("      image: {}", config.asset_path(&cert.image).display());
    }

    println!("\nProjects ({}):", content.projects.len());
    for project in &content.projects {
        let link = match LinkTarget::parse(&project.link) {
            LinkTarget::External(url) => url.to_string(),
            _ => "(no link)".to_string(),
        };
        println!(
            "  [{}] {} ({}) {}",
            project.id,
            project.title,
            project.category.key(),
            link
        );
    }

    Ok(())
}
