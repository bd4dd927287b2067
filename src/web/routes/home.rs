use axum::{extract::State, response::Html};

use crate::{
    web::{types::FormState, WebResult},
    AppState,
};

pub async fn home(State(app_state): State<AppState>) -> WebResult<Html<String>> {
    let body = render_landing_page(&app_state, &FormState::Idle)?;

    Ok(Html(body))
}

/// Renders the landing page with the waitlist form in the given state.
pub fn render_landing_page(app_state: &AppState, form: &FormState) -> Result<String, tera::Error> {
    let mut ctx = tera::Context::new();
    ctx.insert("content", &app_state.content);
    form.insert_into(&mut ctx);

    app_state.templ_mgr.render_html_to_string(&ctx, "home.html")
}
