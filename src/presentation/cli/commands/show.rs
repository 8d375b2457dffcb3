use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::application::use_cases::scm_types::{ScmTypesConfig, ScmTypesUseCase};
use crate::presentation::cli::OutputFormat;

/// Handler for the show command
pub struct ShowCommand {
    pub plugin_infos_path: PathBuf,
    pub id: String,
    pub output: OutputFormat,
}

impl ShowCommand {
    pub fn new(plugin_infos_path: PathBuf, id: String, output: OutputFormat) -> Self {
        Self {
            plugin_infos_path,
            id,
            output,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let use_case = ScmTypesUseCase::new(ScmTypesConfig::new(&self.plugin_infos_path));
        let descriptor = use_case.show(&self.id).await?;

        match self.output {
            OutputFormat::Text => {
                println!("{}", self.id.bold());
                println!("  type:        {}", descriptor.material_type);
                println!("  description: {}", descriptor.description);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&descriptor)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&descriptor)?),
        }

        Ok(())
    }
}
