//! Stem derivation and grouping.
//!
//! A stem is the grouping key that collapses format and fragment variants of
//! the same logical document. DevDocs trees contain families like
//! `list.html` / `list.fragment.html` / `list.2.html` which all describe one
//! topic; search should treat them as a single result group.
//!
//! Normalization rules, applied in order:
//!
//! | # | Rule                                                            |
//! |---|-----------------------------------------------------------------|
//! | 1 | Lowercase the whole path                                        |
//! | 2 | Normalize `\` separators to `/`                                 |
//! | 3 | Strip one trailing `.html` or `.htm` extension                  |
//! | 4 | Repeatedly strip a trailing dot-segment that is `fragment`,     |
//! |   | `frag`, or all ASCII digits (section/variant markers)           |
//!
//! Dot-segments that carry meaning (`array.prototype`) survive rule 4.

use crate::index::DocEntry;
use std::collections::HashMap;

/// Derive the stem of a relative documentation path.
///
/// Pure and deterministic: equal inputs always produce equal stems.
pub fn stem_of(path: &str) -> String {
    let mut stem = path.to_ascii_lowercase().replace('\\', "/");

    for ext in [".html", ".htm"] {
        if let Some(stripped) = stem.strip_suffix(ext) {
            stem = stripped.to_string();
            break;
        }
    }

    loop {
        let Some((rest, last)) = stem.rsplit_once('.') else {
            break;
        };
        let is_variant_marker = last == "fragment"
            || last == "frag"
            || (!last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()));
        // Never strip down past the file name itself.
        if is_variant_marker && !rest.is_empty() && !rest.ends_with('/') {
            stem = rest.to_string();
        } else {
            break;
        }
    }

    stem
}

/// Group entries by stem, preserving insertion order of both the groups and
/// the members within each group.
pub fn group_by_stem<'a>(entries: &'a [&'a DocEntry]) -> Vec<(String, Vec<&'a DocEntry>)> {
    let mut order: Vec<(String, Vec<&DocEntry>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        match positions.get(entry.stem.as_str()) {
            Some(&idx) => order[idx].1.push(entry),
            None => {
                positions.insert(entry.stem.as_str(), order.len());
                order.push((entry.stem.clone(), vec![entry]));
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("python/list.html", "python/list")]
    #[case("python/list.fragment.html", "python/list")]
    #[case("python/list.frag.html", "python/list")]
    #[case("python/list.2.html", "python/list")]
    #[case("python/list.fragment.3.html", "python/list")]
    #[case("Python/LIST.HTML", "python/list")]
    #[case("javascript/array.prototype.html", "javascript/array.prototype")]
    #[case("rust/vec.htm", "rust/vec")]
    #[case("css/grid", "css/grid")]
    fn stem_rule_table(#[case] input: &str, #[case] expected: &str) {
        check!(stem_of(input) == expected);
    }

    #[test]
    fn stem_is_deterministic() {
        check!(stem_of("python/list.fragment.html") == stem_of("python/list.fragment.html"));
    }

    #[test]
    fn grouping_preserves_insertion_order() {
        let a = DocEntry {
            path: "python/list.html".into(),
            title: "python/list".into(),
            stem: "python/list".into(),
            doc_set: "python".into(),
        };
        let b = DocEntry {
            path: "python/dict.html".into(),
            title: "python/dict".into(),
            stem: "python/dict".into(),
            doc_set: "python".into(),
        };
        let c = DocEntry {
            path: "python/list.fragment.html".into(),
            title: "python/list.fragment".into(),
            stem: "python/list".into(),
            doc_set: "python".into(),
        };

        let entries = vec![&a, &b, &c];
        let groups = group_by_stem(&entries);

        check!(groups.len() == 2);
        check!(groups[0].0 == "python/list");
        check!(groups[0].1.len() == 2);
        check!(groups[0].1[0].path == "python/list.html");
        check!(groups[0].1[1].path == "python/list.fragment.html");
        check!(groups[1].0 == "python/dict");
    }
}
