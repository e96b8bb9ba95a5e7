use crate::request::FormFields;
use crate::response::types::Branch;

/// Fields whose presence switches a response to [`Branch::Submission`].
pub const TRACKED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// Submission if any tracked field has a non-empty value.
///
/// An empty value and an absent field are equivalent here; a blank entry
/// followed by a filled one still counts as submitted.
pub fn select_branch(fields: &FormFields) -> Branch {
    let submitted = TRACKED_FIELDS
        .iter()
        .any(|name| fields.first_non_blank(name).is_some());

    if submitted {
        Branch::Submission
    } else {
        Branch::Diagnostic
    }
}
