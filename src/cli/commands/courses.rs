use anyhow::{bail, Result};
use tracing::{error, info};

use crate::client::UpstreamClient;

pub async fn courses(client: &UpstreamClient, subject: &str) -> Result<()> {
    if subject.is_empty() {
        bail!("A subject code is required");
    }
    info!("Fetching courses for {} from {}", subject, client.base_url());

    let courses = match client.list_courses(subject).await {
        Ok(courses) => courses,
        Err(e) => {
            error!("Failed to fetch courses for {}: {}", subject, e);
            return Err(e.into());
        }
    };

    if courses.is_empty() {
        println!("No course found.");
    }
    for course in courses {
        println!("{}", course.label());
    }
    Ok(())
}
