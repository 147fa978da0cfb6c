pub mod json;
pub mod md;

use crate::error::DashError;
use crate::types::view::ViewModel;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(view: &ViewModel, format: OutputFormat) -> Result<String, DashError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(DashError::Json),
        OutputFormat::Md => Ok(md::to_markdown(view)),
    }
}
