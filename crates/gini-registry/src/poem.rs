//! The consciousness-mirror poem, annotated line by line.

use gini_core::{Layer, Stanza};

use gini_core::Layer::{Application as App, Infrastructure as Infra, Platform};

const STANZAS: &[(&str, &str, Layer, &str)] = &[
    ("The Zen of Python, by Tim Peters", "Foundation of clarity in code", App, "import this"),
    ("Beautiful is better than ugly.", "Aesthetic code reduces cognitive load", Platform, "gosilang.aesthetics"),
    ("Explicit is better than implicit.", "Clear intent prevents bugs", Platform, "rift.explicit"),
    ("Simple is better than complex.", "Simplicity scales better", Infra, "libpolycall.simple"),
    ("Complex is better than complicated.", "Organized complexity over chaos", Infra, "nlink.organize"),
    ("Flat is better than nested.", "Reduce dependency depth", Platform, "polybuild.flatten"),
    ("Sparse is better than dense.", "Breathing room in code structure", App, "obinexus.sparse"),
    ("Readability counts.", "Code is read more than written", Platform, "rift.readable"),
    ("Special cases aren't special enough to break the rules.", "Consistency over exceptions", Infra, "constitutional.rules"),
    ("Although practicality beats purity.", "Real-world solutions matter", App, "opensense.practical"),
    ("Errors should never pass silently.", "Explicit error handling", Infra, "node-zero.errors"),
    ("Unless explicitly silenced.", "Intentional suppression only", Platform, "rift.suppress"),
    ("In the face of ambiguity, refuse the temptation to guess.", "Deterministic behavior", Infra, "quantum.deterministic"),
    ("There should be one-- and preferably only one --obvious way to do it.", "Single clear path", Platform, "gosilang.singleton"),
    ("Although that way may not be obvious at first unless you're Dutch.", "Cultural context in design", App, "obinexus.culture"),
    ("Now is better than never.", "Ship working code", App, "milestone.ship"),
    ("Although never is often better than *right* now.", "Quality over speed", Platform, "rift.quality"),
    ("If the implementation is hard to explain, it's a bad idea.", "Complexity should be justified", Infra, "libpolycall.explain"),
    ("If the implementation is easy to explain, it may be a good idea.", "Simplicity validates design", App, "obinexus.validate"),
    ("Namespaces are one honking great idea -- let's do more of those!", "Isolation prevents conflicts", Infra, "nlink.namespace"),
];

/// Returns the twenty stanzas, numbered from 1 in declaration order.
#[must_use]
pub fn default_stanzas() -> Vec<Stanza> {
    STANZAS
        .iter()
        .enumerate()
        .map(|(i, &(text, meaning, layer, package))| Stanza::new(i + 1, text, meaning, layer, package))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_follow_declaration_order() {
        let stanzas = default_stanzas();

        assert_eq!(stanzas.len(), 20);
        for (i, stanza) in stanzas.iter().enumerate() {
            assert_eq!(stanza.line, i + 1);
        }
        assert_eq!(stanzas[19].package, "nlink.namespace");
    }
}
