//! Template rendering over the enumeration's data model.
//!
//! The template is mustache-style handlebars, supplied by the user in the
//! data directory, so the markup can change without touching this crate.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;

use heteronym_engine::PermutationRecord;
use heteronym_lexicon::Heteronym;

#[derive(Serialize)]
struct StructureContext<'a> {
    permutations: &'a [PermutationRecord],
    heteronyms: &'a [Heteronym],
}

/// Renders `template` over the full enumeration and its heteronyms.
///
/// The template sees two top-level sequences, `permutations` and
/// `heteronyms`, keyed by the same record index.
///
/// # Errors
///
/// Returns an error if the template fails to parse or render.
pub fn render_structure(
    template: &str,
    permutations: &[PermutationRecord],
    heteronyms: &[Heteronym],
) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(false);
    registry
        .register_template_string("structure", template)
        .context("Cannot parse structure template")?;
    registry
        .render("structure", &StructureContext { permutations, heteronyms })
        .context("Cannot render structure template")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use heteronym_engine::{transform, Permutation};
    use heteronym_lexicon::Vocabulary;

    use super::*;

    fn one_record() -> PermutationRecord {
        let mut diagnostics = Vec::new();
        let record = transform(1, Permutation::identity(), &mut diagnostics);
        assert!(diagnostics.is_empty());
        record
    }

    #[test]
    fn renders_record_fields() {
        let records = vec![one_record()];
        let template = "{{#each permutations}}{{index}}: {{display}} {{label}}{{/each}}";
        let html = render_structure(template, &records, &[]).unwrap();
        assert_eq!(html, "1: (1, 2, 3, 4, 5, 6) AFHJNAEIKMBDHLMBFGKOCEGLNCDIJO");
    }

    #[test]
    fn renders_nested_totals() {
        let records = vec![one_record()];
        let template =
            "{{#each permutations}}{{#each totals}}{{source}}->{{automorphism}} {{/each}}{{/each}}";
        let html = render_structure(template, &records, &[]).unwrap();
        assert_eq!(html, "t1->t1 t2->t2 t3->t3 t4->t4 t5->t5 t6->t6 ");
    }

    #[test]
    fn renders_heteronyms() {
        let given = Vocabulary::from_words("given_names", vec!["Alberto".into()]).unwrap();
        let surnames = Vocabulary::from_words("surnames", vec!["Caeiro".into()]).unwrap();
        let record = one_record();
        let heteronyms = vec![Heteronym::from_label(1, &record.label, &given, &surnames)];
        let template = "{{#each heteronyms}}{{index}} {{name}}{{/each}}";
        let html = render_structure(template, &[record], &heteronyms).unwrap();
        assert_eq!(html, "1 Alberto Caeiro");
    }

    #[test]
    fn rejects_malformed_templates() {
        assert!(render_structure("{{#each permutations}}", &[], &[]).is_err());
    }
}
