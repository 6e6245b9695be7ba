//! Depth-first walk over a JSON document, classifying every scalar leaf and
//! resolving an icon for every object key.

use serde_json::Value;

use crate::classifier::classify;
use crate::display::format_label;
use crate::resolver::{builtin_resolver, IconResolver};
use crate::types::{DisplayNode, LabelView, ScalarValue, VisualizeOptions};

/// Walk `value` with the built-in resolver.
pub fn visualize(value: &Value, options: &VisualizeOptions) -> DisplayNode {
    visualize_with(builtin_resolver(), value, options)
}

pub fn visualize_with(
    resolver: &IconResolver,
    value: &Value,
    options: &VisualizeOptions,
) -> DisplayNode {
    let walker = Walker { resolver, options };
    walker.walk(value, None, 0)
}

struct Walker<'a> {
    resolver: &'a IconResolver,
    options: &'a VisualizeOptions,
}

impl Walker<'_> {
    fn walk(&self, value: &Value, key: Option<&str>, depth: usize) -> DisplayNode {
        let label = key.map(|k| self.label_view(k));

        if self.options.max_depth.is_some_and(|max| depth > max) {
            return DisplayNode::Truncated { label };
        }

        match value {
            Value::Object(map) => DisplayNode::Object {
                label,
                entries: map
                    .iter()
                    .map(|(k, v)| self.walk(v, Some(k), depth + 1))
                    .collect(),
            },
            Value::Array(items) => DisplayNode::Array {
                label,
                items: items
                    .iter()
                    .map(|v| self.walk(v, None, depth + 1))
                    .collect(),
            },
            Value::Null => self.leaf(label, ScalarValue::Null),
            Value::Bool(b) => self.leaf(label, ScalarValue::Boolean(*b)),
            Value::Number(n) => self.leaf(label, ScalarValue::Number(n.as_f64().unwrap_or(f64::NAN))),
            Value::String(s) => self.leaf(label, ScalarValue::String(s.clone())),
        }
    }

    fn leaf(&self, label: Option<LabelView>, scalar: ScalarValue) -> DisplayNode {
        let classification = classify(&scalar);
        let text = classification.display_text();
        DisplayNode::Value {
            label,
            classification,
            text,
        }
    }

    fn label_view(&self, key: &str) -> LabelView {
        LabelView {
            key: key.to_string(),
            title: format_label(key),
            icon: self.options.icons.then(|| self.resolver.resolve(key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys(node: &DisplayNode) -> Vec<String> {
        match node {
            DisplayNode::Object { entries, .. } => entries
                .iter()
                .filter_map(|e| e.label().map(|l| l.key.clone()))
                .collect(),
            _ => vec![],
        }
    }

    #[test]
    fn scalar_root_has_no_label() {
        let node = visualize(&json!(0.5), &VisualizeOptions::default());
        match node {
            DisplayNode::Value { label, text, .. } => {
                assert!(label.is_none());
                assert_eq!(text, "50%");
            }
            other => panic!("expected value node, got {other:?}"),
        }
    }

    #[test]
    fn object_keys_keep_insertion_order() {
        let input: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let node = visualize(&input, &VisualizeOptions::default());
        assert_eq!(keys(&node), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn array_items_unlabeled() {
        let node = visualize(&json!({"tags": ["a", "b"]}), &VisualizeOptions::default());
        let DisplayNode::Object { entries, .. } = node else {
            panic!("expected object");
        };
        let DisplayNode::Array { label, items } = &entries[0] else {
            panic!("expected array");
        };
        assert_eq!(label.as_ref().map(|l| l.title.as_str()), Some("Tags"));
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.label().is_none()));
    }

    #[test]
    fn labels_get_icons_unless_disabled() {
        let input = json!({"email": "a@b.com"});
        let with = visualize(&input, &VisualizeOptions::default());
        assert!(with.label().is_none());
        let DisplayNode::Object { entries, .. } = &with else {
            panic!("expected object");
        };
        assert!(entries[0].label().and_then(|l| l.icon).is_some());

        let options = VisualizeOptions {
            icons: false,
            ..Default::default()
        };
        let without = visualize(&input, &options);
        let DisplayNode::Object { entries, .. } = &without else {
            panic!("expected object");
        };
        assert!(entries[0].label().and_then(|l| l.icon).is_none());
    }

    #[test]
    fn depth_limit_truncates() {
        let options = VisualizeOptions {
            icons: false,
            max_depth: Some(1),
        };
        let node = visualize(&json!({"a": {"b": {"c": 1}}}), &options);
        let DisplayNode::Object { entries, .. } = node else {
            panic!("expected object");
        };
        let DisplayNode::Object { entries: inner, .. } = &entries[0] else {
            panic!("expected nested object");
        };
        assert!(matches!(inner[0], DisplayNode::Truncated { .. }));
        assert_eq!(inner[0].label().map(|l| l.key.as_str()), Some("b"));
    }
}
