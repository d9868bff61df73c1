use anyhow::Result;
use std::path::PathBuf;
use templatist::builder::{builtin_catalog, builtin_data_sources, EditorHost, Template};
use templatist::config::Config;
use templatist::{logger, ui};

/// Host that persists the saved template as pretty-printed JSON.
struct JsonFileHost {
    path: PathBuf,
    saved: bool,
    cancelled: bool,
}

impl JsonFileHost {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            saved: false,
            cancelled: false,
        }
    }
}

impl EditorHost for JsonFileHost {
    fn on_save(&mut self, template: Template) {
        match serde_json::to_string_pretty(&template) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    log::error!("Failed to write template to {}: {e}", self.path.display());
                } else {
                    self.saved = true;
                }
            }
            Err(e) => log::error!("Failed to serialize template: {e}"),
        }
    }

    fn on_cancel(&mut self) {
        self.cancelled = true;
    }
}

fn main() -> Result<()> {
    // First run: materialize a default config so it is discoverable and editable
    if let Ok(default_config_path) = Config::get_default_config_path() {
        if !default_config_path.exists() && !PathBuf::from("templatist.toml").exists() {
            Config::generate_default_config(&default_config_path)?;
        }
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Resume a previous session if a saved template exists
    let output_path = PathBuf::from("template.json");
    let template = match std::fs::read_to_string(&output_path) {
        Ok(content) => Some(serde_json::from_str(&content)?),
        Err(_) => None,
    };

    let mut host = JsonFileHost::new(output_path);
    ui::run_app(
        &config,
        template,
        builtin_catalog().to_vec(),
        builtin_data_sources().to_vec(),
        &mut host,
    )?;

    if host.saved {
        println!("✅ Template written to {}", host.path.display());
    } else if host.cancelled {
        println!("Editing cancelled, nothing written");
    }

    Ok(())
}
