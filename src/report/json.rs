use crate::types::view::ViewModel;

pub fn to_json(view: &ViewModel) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
