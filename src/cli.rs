use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::client::UpstreamClient;
use crate::config::AppConfig;
use commands::{courses, predict, serve, subjects};

#[derive(Parser)]
#[command(name = "grade-predictor")]
#[command(about = "Grade predictor web gateway and command-line client")]
#[command(version)]
pub struct Cli {
    /// Base URL of the prediction backend, e.g. http://localhost:8000
    ///
    /// Overrides `upstream_url` from the configuration file.
    #[arg(long, global = true, env = "GRADE_PREDICTOR_UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web gateway
    Serve {
        /// Address to listen on, e.g. 0.0.0.0:3000
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory holding the compiled frontend (index.html and assets)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// List the subjects offered by the backend
    Subjects,
    /// List the courses of one subject
    Courses {
        /// Subject code, e.g. CS
        #[arg(short, long)]
        subject: String,
    },
    /// Request a grade prediction
    ///
    /// Runs the same checks as the web form: the subject and course must
    /// exist and the year must be within the offered range.
    Predict {
        /// Subject code, e.g. CS
        #[arg(short, long)]
        subject: String,

        /// Course number within the subject, e.g. 101
        #[arg(short, long)]
        course: String,

        /// Year to predict; defaults to the current year
        #[arg(short, long)]
        year: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = AppConfig::load()?;
        if let Some(upstream_url) = self.upstream_url {
            config.upstream_url = upstream_url;
        }

        match self.command {
            Commands::Serve {
                bind_address,
                static_dir,
            } => {
                if let Some(bind_address) = bind_address {
                    config.bind_address = bind_address;
                }
                if static_dir.is_some() {
                    config.static_dir = static_dir;
                }
                serve(config).await?;
            }
            Commands::Subjects => {
                let client = UpstreamClient::from_config(&config)?;
                subjects(&client).await?;
            }
            Commands::Courses { subject } => {
                let client = UpstreamClient::from_config(&config)?;
                courses(&client, &subject).await?;
            }
            Commands::Predict {
                subject,
                course,
                year,
            } => {
                let client = UpstreamClient::from_config(&config)?;
                predict(&client, &subject, &course, year.as_deref()).await?;
            }
        }
        Ok(())
    }
}
