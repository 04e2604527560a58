//! Shared application state for the web server.

use std::path::PathBuf;
use std::sync::Arc;

use minijinja::Environment;

use atriarisk_common::Result;

/// Shared state injected into every axum handler.
pub struct AppState {
    /// Root of everything served under `/static`.
    pub static_root: PathBuf,
    /// Request-scoped upload directories live here.
    pub upload_root: PathBuf,
    /// Gauges rendered for CSV uploads: `<static_root>/plots1`.
    pub upload_plot_root: PathBuf,
    /// Gauges rendered for single-patient forms: `<static_root>/plots2`.
    pub form_plot_root: PathBuf,
    /// Compiled page templates.
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(static_root: impl Into<PathBuf>, upload_root: impl Into<PathBuf>) -> Result<AppState> {
        let static_root = static_root.into();
        let upload_root = upload_root.into();
        let upload_plot_root = static_root.join("plots1");
        let form_plot_root = static_root.join("plots2");

        std::fs::create_dir_all(&upload_root)?;
        std::fs::create_dir_all(&upload_plot_root)?;
        std::fs::create_dir_all(&form_plot_root)?;

        Ok(AppState {
            static_root,
            upload_root,
            upload_plot_root,
            form_plot_root,
            templates: build_templates()?,
        })
    }

    pub fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        Ok(self.templates.get_template(name)?.render(ctx)?)
    }
}

fn build_templates() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../templates/base.html"))?;
    env.add_template("landing.html", include_str!("../templates/landing.html"))?;
    env.add_template("home.html", include_str!("../templates/home.html"))?;
    env.add_template("composite.html", include_str!("../templates/composite.html"))?;
    env.add_template("afprogression.html", include_str!("../templates/afprogression.html"))?;
    env.add_template("pac.html", include_str!("../templates/pac.html"))?;
    env.add_template("pstaf.html", include_str!("../templates/pstaf.html"))?;
    env.add_template("data_formats.html", include_str!("../templates/data_formats.html"))?;
    env.add_template("tutorials.html", include_str!("../templates/tutorials.html"))?;
    env.add_template("contact.html", include_str!("../templates/contact.html"))?;
    env.add_template("results.html", include_str!("../templates/results.html"))?;
    env.add_template("display.html", include_str!("../templates/display.html"))?;
    env.add_template("error.html", include_str!("../templates/error.html"))?;
    Ok(env)
}

pub type SharedState = Arc<AppState>;
