use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::application::use_cases::scm_types::{ScmTypesConfig, ScmTypesUseCase};
use crate::domain::entities::scm_type_descriptor::ScmTypeDescriptor;
use crate::presentation::cli::OutputFormat;

/// Handler for the list command
pub struct ListCommand {
    pub plugin_infos_path: PathBuf,
    pub output: OutputFormat,
    pub verbose: bool,
}

impl ListCommand {
    pub fn new(plugin_infos_path: PathBuf, output: OutputFormat, verbose: bool) -> Self {
        Self {
            plugin_infos_path,
            output,
            verbose,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        // stdout carries only the rendered types
        if self.verbose {
            eprintln!(
                "{} Loading plugin infos from {}",
                "::".blue().bold(),
                self.plugin_infos_path.display()
            );
        }

        let use_case = ScmTypesUseCase::new(ScmTypesConfig::new(&self.plugin_infos_path));
        let types = use_case.list().await?;

        match self.output {
            OutputFormat::Text => self.print_text(&types),
            OutputFormat::Json => {
                let map: BTreeMap<_, _> = types.into_iter().collect();
                println!("{}", serde_json::to_string_pretty(&map)?);
            }
            OutputFormat::Yaml => {
                let map: BTreeMap<_, _> = types.into_iter().collect();
                print!("{}", serde_yaml::to_string(&map)?);
            }
        }

        Ok(())
    }

    fn print_text(&self, types: &[(String, ScmTypeDescriptor)]) {
        if types.is_empty() {
            println!("{} No pluggable SCM plugins registered", "!".yellow().bold());
            return;
        }

        println!(
            "{} {} pluggable SCM type(s):",
            "::".blue().bold(),
            types.len()
        );
        for (id, descriptor) in types {
            println!(
                "  {} {} ({})",
                "*".green(),
                id.bold(),
                descriptor.description
            );
        }
    }
}
