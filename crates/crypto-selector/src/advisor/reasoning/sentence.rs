//! Natural-language composition of reason clauses.

pub const OPENER: &str = "This algorithm";
pub const NO_REASONS: &str = "It provides a solid balance of features based on your input.";

/// Join clauses into one sentence: `This algorithm a.`, `This algorithm a and b.`,
/// `This algorithm a, b, and c.` Every clause, not only the opening one, gets a lower-case first
/// letter so no capital lands mid-sentence; the rest of each clause is left untouched.
pub fn compose<S: AsRef<str>>(clauses: &[S]) -> String {
    let parts: Vec<String> = clauses
        .iter()
        .map(|clause| lowercase_first(clause.as_ref().trim()))
        .filter(|clause| !clause.is_empty())
        .collect();

    let body = match parts.as_slice() {
        [] => return NO_REASONS.to_string(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    };

    format!("{OPENER} {body}.")
}

fn lowercase_first(clause: &str) -> String {
    let mut chars = clause.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
