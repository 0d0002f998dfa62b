mod container;
mod data;
mod dataobjects;
mod document;
mod error;
mod settings;

#[macro_use]
extern crate lazy_static;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::container::Page;
use crate::document::Resume;
use crate::settings::Settings;

fn main() -> Result<()> {
    let settings = Settings::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::info!(
        "Settings loaded ({})",
        crate::settings::describe_source(crate::settings::default_config_path().as_deref())
    );

    // Build the records
    let resume = Resume {
        bio: data::bio(),
        work: data::work(),
        education: data::education(),
    };

    // Render them into the page, once
    let mut page = Page::with_targets(Resume::TARGETS.iter().copied());
    resume.render(&mut page, &settings.layout())?;
    tracing::info!("Rendered {} sections", Resume::TARGETS.len());

    println!("{}", page.to_html());
    Ok(())
}
