use anyhow::Result;
use tracing::{error, info};

use crate::client::UpstreamClient;

pub async fn subjects(client: &UpstreamClient) -> Result<()> {
    info!("Fetching subjects from {}", client.base_url());

    let subjects = match client.list_subjects().await {
        Ok(subjects) => subjects,
        Err(e) => {
            error!("Failed to fetch subjects: {}", e);
            return Err(e.into());
        }
    };

    if subjects.is_empty() {
        println!("No subjects found.");
    }
    for subject in subjects {
        println!("{}", subject.subject_code);
    }
    Ok(())
}
