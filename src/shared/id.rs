//! Record id generation

use uuid::Uuid;

/// Draw a fresh UUID v4 that `taken` does not already contain.
///
/// A collision is astronomically unlikely, but the loop makes uniqueness
/// within a collection a guarantee rather than a probability.
pub fn unique_id(mut taken: impl FnMut(&str) -> bool) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !taken(&id) {
            return id;
        }
    }
}
