//! What the questioning parrot knows.

use gini_core::GossipProfile;

const QUESTIONS: &[&str] = &[
    "Gini ka inweta?",
    "Kedu nke a?",
    "Gini?",
    "What are you building?",
    "What language is that?",
    "What does this code do?",
];

const GOSSIP: &[&str] = &[
    "Did you hear about the new polyglot framework?",
    "I heard Python and Go are best friends now!",
    "Someone told me Rust never forgets...",
    "They say C is the grandfather of all languages!",
];

const LANGUAGES: &[&str] = &["Igbo", "English", "Go", "Python", "C", "Rust"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Returns the parrot's default questions, gossip and sayings.
#[must_use]
pub fn default_profile() -> GossipProfile {
    GossipProfile {
        greeting: "Gini? (What?)".to_string(),
        questions: owned(QUESTIONS),
        gossip: owned(GOSSIP),
        languages: owned(LANGUAGES),
        quote: "I ask 'What?' because I want to understand!".to_string(),
    }
}
