use crate::application::error::{ApplicationError, ApplicationResult};

pub const FIND_TEXT_REQUIRED: &str = "Please enter text to find.";

/// Replace every occurrence of `find` in `content`.
pub fn replace_all(content: &str, find: &str, replacement: &str) -> ApplicationResult<String> {
    if find.is_empty() {
        return Err(ApplicationError::validation(FIND_TEXT_REQUIRED));
    }
    Ok(content.replace(find, replacement))
}
