//! Form variant resolution across nested section and block trees.
//!
//! Sections hold blocks under `config.children`. Container blocks nest further blocks
//! under `config.children` or `config.child`. Form blocks carry their A/B/n variants in
//! `data.variants`, each with its own `document` and a `definition` shared by all of
//! them.

use serde_json::{Map, Value};
use tracing::debug;

use super::selection::{coerce_candidates, has_id, select_variant};

const NESTED_BLOCK_KEYS: [&str; 2] = ["children", "child"];

/// Returns a copy of `sections` with every multivariate form block narrowed to one
/// variant.
///
/// Anything that does not have the expected shape is passed through as is, and a
/// non-array input comes back unchanged. Key names and nesting are preserved and the
/// input is never mutated.
///
/// Unlike the page and blog resolvers, a form whose selected id cannot be matched is
/// left unresolved instead of falling back to its first variant.
///
/// # Examples
///
/// ```
/// use contentkit_core::variant::resolve_form_variants_in_sections;
/// use serde_json::json;
///
/// let sections = json!([{
///     "type": "section",
///     "config": {"children": [{
///         "type": "form",
///         "data": {
///             "definition": {},
///             "multivariate": true,
///             "variants": [{"id": "v", "weight": 100, "document": {"k": 1}}]
///         }
///     }]}
/// }]);
///
/// let resolved = resolve_form_variants_in_sections(&sections, 0.0);
/// assert_eq!(
///     resolved[0]["config"]["children"][0]["data"],
///     json!({"definition": {}, "document": {"k": 1}})
/// );
/// ```
pub fn resolve_form_variants_in_sections(sections: &Value, bucket: f64) -> Value {
    let Some(sections) = sections.as_array() else {
        return sections.clone();
    };

    Value::Array(
        sections
            .iter()
            .map(|section| resolve_section(section, bucket))
            .collect(),
    )
}

fn resolve_section(section: &Value, bucket: f64) -> Value {
    let Some(record) = section.as_object() else {
        return section.clone();
    };
    let Some(config) = record.get("config").and_then(Value::as_object) else {
        return section.clone();
    };
    let Some(children) = config.get("children").and_then(Value::as_array) else {
        return section.clone();
    };

    with_config_entry(record, config, "children", resolve_blocks(children, bucket))
}

fn resolve_blocks(blocks: &[Value], bucket: f64) -> Vec<Value> {
    blocks
        .iter()
        .map(|block| resolve_block(block, bucket))
        .collect()
}

fn resolve_block(block: &Value, bucket: f64) -> Value {
    let Some(record) = block.as_object() else {
        return block.clone();
    };

    if record.get("type").and_then(Value::as_str) == Some("form") {
        return resolve_form_block(record, bucket).unwrap_or_else(|| block.clone());
    }

    let Some(config) = record.get("config").and_then(Value::as_object) else {
        return block.clone();
    };

    for key in NESTED_BLOCK_KEYS {
        if let Some(children) = config.get(key).and_then(Value::as_array) {
            return with_config_entry(record, config, key, resolve_blocks(children, bucket));
        }
    }

    block.clone()
}

/// Returns the narrowed form block, or `None` when the block should pass through.
fn resolve_form_block(block: &Map<String, Value>, bucket: f64) -> Option<Value> {
    let data = block.get("data")?.as_object()?;
    if data.get("multivariate") != Some(&Value::Bool(true)) {
        return None;
    }
    let variants = data
        .get("variants")?
        .as_array()
        .filter(|variants| !variants.is_empty())?;

    let candidates = coerce_candidates(variants);
    let selected = select_variant(bucket, &candidates).ok()?;

    let Some(matched) = variants.iter().find(|v| has_id(v, selected)) else {
        debug!(selected, "selected form variant not found, leaving form unresolved");
        return None;
    };

    let mut resolved = Map::new();
    if let Some(definition) = data.get("definition") {
        resolved.insert("definition".to_string(), definition.clone());
    }
    if let Some(document) = matched.get("document") {
        resolved.insert("document".to_string(), document.clone());
    }

    let mut out = copy_except(block, "data");
    out.insert("data".to_string(), Value::Object(resolved));
    Some(Value::Object(out))
}

/// Rebuilds `node` with `config[key]` replaced by `resolved`.
fn with_config_entry(
    node: &Map<String, Value>,
    config: &Map<String, Value>,
    key: &str,
    resolved: Vec<Value>,
) -> Value {
    let mut config = copy_except(config, key);
    config.insert(key.to_string(), Value::Array(resolved));

    let mut node = copy_except(node, "config");
    node.insert("config".to_string(), Value::Object(config));
    Value::Object(node)
}

fn copy_except(map: &Map<String, Value>, skip: &str) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| key.as_str() != skip)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn form_block(variants: Value) -> Value {
        json!({
            "type": "form",
            "id": "signup",
            "data": {
                "definition": {"fields": ["email"]},
                "multivariate": true,
                "variants": variants
            }
        })
    }

    fn section_with(children: Value) -> Value {
        json!([{"type": "section", "config": {"padding": 4, "children": children}}])
    }

    #[test]
    fn test_resolves_form_in_section() {
        let sections = json!([{
            "type": "section",
            "config": {"children": [{
                "type": "form",
                "data": {
                    "definition": {},
                    "multivariate": true,
                    "variants": [{"id": "v", "weight": 100, "document": {"k": 1}}]
                }
            }]}
        }]);

        let resolved = resolve_form_variants_in_sections(&sections, 0.0);

        assert_eq!(
            resolved,
            json!([{
                "type": "section",
                "config": {"children": [{
                    "type": "form",
                    "data": {"definition": {}, "document": {"k": 1}}
                }]}
            }])
        );
    }

    #[test]
    fn test_keeps_block_fields_and_section_config() {
        let sections = section_with(json!([form_block(json!([
            {"id": "a", "weight": 50, "document": {"title": "A"}},
            {"id": "b", "weight": 50, "document": {"title": "B"}}
        ]))]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.75);

        assert_eq!(resolved[0]["config"]["padding"], 4);
        let block = &resolved[0]["config"]["children"][0];
        assert_eq!(block["id"], "signup");
        assert_eq!(
            block["data"],
            json!({"definition": {"fields": ["email"]}, "document": {"title": "B"}})
        );
    }

    #[test]
    fn test_section_without_children_passes_through() {
        let sections = json!([
            {"type": "section", "config": {"padding": 2}},
            {"type": "section", "config": {"child": [form_block(json!([{"id": "a", "weight": 1}]))]}},
            {"type": "section"},
            {"type": "section", "config": "broken"},
            "not a section",
            null
        ]);

        let resolved = resolve_form_variants_in_sections(&sections, 0.1);

        assert_eq!(resolved, sections);
    }

    #[test]
    fn test_non_array_input_returned_unchanged() {
        for input in [json!(null), json!({"config": {}}), json!("x"), json!(3)] {
            assert_eq!(resolve_form_variants_in_sections(&input, 0.5), input);
        }
    }

    #[test]
    fn test_resolves_deeply_nested_forms() {
        let sections = section_with(json!([{
            "type": "columns",
            "config": {"gap": 2, "children": [{
                "type": "column",
                "config": {"child": [
                    {"type": "text", "config": {"text": "hi"}},
                    form_block(json!([{"id": "only", "weight": 1, "document": {"deep": true}}]))
                ]}
            }]}
        }]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.4);

        let columns = &resolved[0]["config"]["children"][0];
        assert_eq!(columns["config"]["gap"], 2);
        let column = &columns["config"]["children"][0];
        assert_eq!(column["config"]["child"][0], json!({"type": "text", "config": {"text": "hi"}}));
        assert_eq!(
            column["config"]["child"][1]["data"],
            json!({"definition": {"fields": ["email"]}, "document": {"deep": true}})
        );
    }

    #[test]
    fn test_children_takes_priority_over_child() {
        let nested_form = form_block(json!([{"id": "a", "weight": 1, "document": {"v": 1}}]));
        let sections = section_with(json!([{
            "type": "container",
            "config": {"children": [nested_form.clone()], "child": [nested_form.clone()]}
        }]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.0);

        let container = &resolved[0]["config"]["children"][0];
        assert_eq!(
            container["config"]["children"][0]["data"]["document"],
            json!({"v": 1})
        );
        assert_eq!(container["config"]["child"][0], nested_form);
    }

    #[test]
    fn test_unmatched_numeric_ids_leave_form_unchanged() {
        let form = form_block(json!([
            {"id": 1, "weight": 50, "document": {"n": 1}},
            {"id": 2, "weight": 50, "document": {"n": 2}}
        ]));
        let sections = section_with(json!([form.clone()]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.2);

        assert_eq!(resolved[0]["config"]["children"][0], form);
    }

    #[test]
    fn test_form_without_multivariate_flag_unchanged() {
        let mut form = form_block(json!([{"id": "a", "weight": 1, "document": {}}]));
        form["data"]["multivariate"] = json!("true");
        let sections = section_with(json!([form.clone()]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.2);

        assert_eq!(resolved[0]["config"]["children"][0], form);
    }

    #[test]
    fn test_form_with_zero_variants_unchanged() {
        let form = form_block(json!([]));
        let sections = section_with(json!([form.clone()]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.2);

        assert_eq!(resolved[0]["config"]["children"][0], form);
    }

    #[test]
    fn test_form_blocks_are_not_recursed() {
        let inner = form_block(json!([{"id": "a", "weight": 1, "document": {}}]));
        let outer = json!({
            "type": "form",
            "data": {"multivariate": false},
            "config": {"children": [inner]}
        });
        let sections = section_with(json!([outer.clone()]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.2);

        assert_eq!(resolved[0]["config"]["children"][0], outer);
    }

    #[test]
    fn test_missing_definition_and_document_are_omitted() {
        let sections = section_with(json!([{
            "type": "form",
            "data": {"multivariate": true, "variants": [{"id": "a", "weight": 1}]}
        }]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.2);

        assert_eq!(resolved[0]["config"]["children"][0]["data"], json!({}));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let sections = section_with(json!([form_block(json!([
            {"id": "a", "weight": 1, "document": {"n": 1}}
        ]))]));
        let before = sections.clone();

        let _ = resolve_form_variants_in_sections(&sections, 0.2);

        assert_eq!(sections, before);
    }

    #[test]
    fn test_tree_shape_preserved_for_non_form_blocks() {
        let sections = section_with(json!([
            {"type": "grid", "config": {"cols": 3, "children": [
                {"type": "image", "config": {"src": "/a.png"}},
                {"type": "stack", "config": {"child": [{"type": "text"}]}},
                42
            ]}},
            {"type": "spacer", "config": null}
        ]));

        let resolved = resolve_form_variants_in_sections(&sections, 0.9);

        assert_eq!(resolved, sections);
    }

    fn block_type() -> impl Strategy<Value = String> {
        "[a-z]{1,8}".prop_filter("form blocks are resolved", |kind| kind != "form")
    }

    fn non_form_block() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<i64>().prop_map(Value::from),
            block_type().prop_map(|kind| json!({"type": kind})),
            (block_type(), any::<u8>())
                .prop_map(|(kind, size)| json!({"type": kind, "config": {"size": size}})),
        ];

        leaf.prop_recursive(4, 32, 4, |inner| {
            (
                block_type(),
                prop::sample::select(vec!["children", "child"]),
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|(kind, key, children)| {
                    let mut config = Map::new();
                    config.insert("gap".to_string(), json!(1));
                    config.insert(key.to_string(), Value::Array(children));
                    json!({"type": kind, "config": config})
                })
        })
    }

    fn non_form_sections() -> impl Strategy<Value = Value> {
        prop::collection::vec(prop::collection::vec(non_form_block(), 0..4), 0..3).prop_map(
            |sections| {
                Value::Array(
                    sections
                        .into_iter()
                        .map(|children| json!({"type": "section", "config": {"children": children}}))
                        .collect(),
                )
            },
        )
    }

    proptest! {
        #[test]
        fn prop_trees_without_forms_are_unchanged(
            sections in non_form_sections(),
            bucket in 0.0f64..1.0,
        ) {
            prop_assert_eq!(resolve_form_variants_in_sections(&sections, bucket), sections);
        }
    }
}
