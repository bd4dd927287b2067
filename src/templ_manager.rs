use core::panic;
use std::sync::OnceLock;

use tera::{Context, Tera};
use tracing::info;

use crate::web::types::ValidSubmission;

#[derive(Debug)]
pub struct TemplateManager {
    tera: &'static Tera,
}

impl TemplateManager {
    pub fn init() -> Self {
        info!(
            "{:<20} - Initializing the Template manager",
            "templ manager"
        );
        static TERA: OnceLock<Tera> = OnceLock::new();
        let tera = TERA.get_or_init(|| {
            Tera::new("templates/**/*").unwrap_or_else(|e| panic!("Parsing error(s): {e}"))
        });
        Self { tera }
    }

    /// A helper function to render a template file from 'html/' directory to String
    pub fn render_html_to_string(
        &self,
        ctx: &Context,
        template_file: &str,
    ) -> Result<String, tera::Error> {
        let template = format!("html/{template_file}");
        self.tera.render(&template, ctx)
    }

    /// Renders the plain text notification body for a waitlist signup.
    pub fn render_signup_email(&self, submission: &ValidSubmission) -> Result<String, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("name", submission.name.as_ref());
        ctx.insert("email", submission.email.as_ref());
        self.tera.render("text/waitlist_signup.txt", &ctx)
    }
}
