//! Crisis-keyword screening.
//!
//! Runs before any model call. A message that trips the screen gets the
//! canned crisis-resources response immediately and is never sent to the
//! model — the escalation path must not depend on model availability.

/// Substrings that indicate a student may be in crisis. Matched
/// case-insensitively against the raw message.
const CRISIS_KEYWORDS: [&str; 6] = [
    "suicide",
    "kill myself",
    "end it all",
    "self-harm",
    "hurt myself",
    "don't want to live",
];

/// The immediate response for a message that trips the crisis screen.
pub const CRISIS_RESPONSE: &str = "\
I'm very concerned about you and want to make sure you get immediate help. \
Please reach out to these crisis resources right now:

**National Suicide Prevention Lifeline: 988**
**Crisis Text Line: Text HOME to 741741**
**Campus Counseling Center: (555) 123-4567**

You don't have to go through this alone. There are people who want to help \
you right now. Is there someone you trust who you can contact or be with?";

/// The reply used when the model call fails — the bot degrades to a static
/// supportive message rather than surfacing an error to the student.
pub const FALLBACK_RESPONSE: &str = "\
I'm here to support you, though I'm having some technical difficulties right \
now. Your feelings are valid, and I want you to know that you're not alone. \
If you need immediate support, please consider reaching out to our campus \
counseling center at (555) 123-4567 or the National Suicide Prevention \
Lifeline at 988.";

/// Check a message against the crisis keyword list. Returns the canned
/// crisis response when any keyword appears.
pub fn screen(message: &str) -> Option<&'static str> {
    let lowered = message.to_lowercase();
    if CRISIS_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Some(CRISIS_RESPONSE)
    } else {
        None
    }
}
