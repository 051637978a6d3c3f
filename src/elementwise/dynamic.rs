//! Dynamically-shaped values: `serde_json::Value`.
//!
//! The static impls cover values whose shape the compiler knows. Parameter
//! payloads that arrive as JSON only reveal their shape at runtime, so this
//! adapter re-derives the structural kind per node: null and bool and number
//! and string are leaves, arrays follow the vector rules (broadcast
//! included), objects follow the record rules.
//!
//! Shape compatibility here also means kind compatibility: operands of
//! different JSON kinds are absent, and two objects only match when they
//! carry exactly the same key set. Results rebuild objects in the target's
//! insertion order (the crate turns on `preserve_order`, so object order is
//! meaningful and stable).
//!
//! Numbers compare by their `f64` projection under the IEEE-754 total order,
//! but the chosen operand is cloned wholesale, so an integer stays an
//! integer in the output no matter which representations it was compared
//! against.

use ordered_float::OrderedFloat;
use serde_json::{Map, Value};

use super::Elementwise;

fn num_key(v: &Value) -> Option<OrderedFloat<f64>> {
    v.as_f64().map(OrderedFloat)
}

fn zip_object(
    a: &Map<String, Value>,
    b: &Map<String, Value>,
    op: fn(&Value, &Value) -> Option<Value>,
) -> Option<Map<String, Value>> {
    if a.len() != b.len() {
        return None;
    }
    let mut out = Map::new();
    for (key, va) in a {
        let vb = b.get(key)?;
        out.insert(key.clone(), op(va, vb)?);
    }
    Some(out)
}

fn clamp_object(
    target: &Map<String, Value>,
    lo: &Map<String, Value>,
    hi: &Map<String, Value>,
) -> Option<Map<String, Value>> {
    if lo.len() != target.len() || hi.len() != target.len() {
        return None;
    }
    let mut out = Map::new();
    for (key, value) in target {
        let field_lo = lo.get(key)?;
        let field_hi = hi.get(key)?;
        out.insert(key.clone(), Value::elementwise_clamp(value, field_lo, field_hi)?);
    }
    Some(out)
}

impl Elementwise for Value {
    fn elementwise_clamp(target: &Self, lo: &Self, hi: &Self) -> Option<Self> {
        match (target, lo, hi) {
            (Value::Null, Value::Null, Value::Null) => Some(Value::Null),
            (Value::Bool(t), Value::Bool(l), Value::Bool(h)) => {
                bool::elementwise_clamp(t, l, h).map(Value::Bool)
            }
            (Value::Number(_), Value::Number(_), Value::Number(_)) => {
                let (t, l, h) = (num_key(target)?, num_key(lo)?, num_key(hi)?);
                if l > h {
                    return None;
                }
                // pick the winning operand so its representation survives
                if t < l {
                    Some(lo.clone())
                } else if t > h {
                    Some(hi.clone())
                } else {
                    Some(target.clone())
                }
            }
            (Value::String(t), Value::String(l), Value::String(h)) => {
                String::elementwise_clamp(t, l, h).map(Value::String)
            }
            (Value::Array(t), Value::Array(l), Value::Array(h)) => {
                <Vec<Value> as Elementwise>::elementwise_clamp(t, l, h).map(Value::Array)
            }
            (Value::Object(t), Value::Object(l), Value::Object(h)) => {
                clamp_object(t, l, h).map(Value::Object)
            }
            // kind mismatch
            _ => None,
        }
    }

    fn elementwise_min(a: &Self, b: &Self) -> Option<Self> {
        match (a, b) {
            (Value::Null, Value::Null) => Some(Value::Null),
            (Value::Bool(x), Value::Bool(y)) => bool::elementwise_min(x, y).map(Value::Bool),
            (Value::Number(_), Value::Number(_)) => {
                Some(if num_key(b)? < num_key(a)? { b.clone() } else { a.clone() })
            }
            (Value::String(x), Value::String(y)) => {
                String::elementwise_min(x, y).map(Value::String)
            }
            (Value::Array(x), Value::Array(y)) => {
                <Vec<Value> as Elementwise>::elementwise_min(x, y).map(Value::Array)
            }
            (Value::Object(x), Value::Object(y)) => {
                zip_object(x, y, Value::elementwise_min).map(Value::Object)
            }
            _ => None,
        }
    }

    fn elementwise_max(a: &Self, b: &Self) -> Option<Self> {
        match (a, b) {
            (Value::Null, Value::Null) => Some(Value::Null),
            (Value::Bool(x), Value::Bool(y)) => bool::elementwise_max(x, y).map(Value::Bool),
            (Value::Number(_), Value::Number(_)) => {
                Some(if num_key(b)? > num_key(a)? { b.clone() } else { a.clone() })
            }
            (Value::String(x), Value::String(y)) => {
                String::elementwise_max(x, y).map(Value::String)
            }
            (Value::Array(x), Value::Array(y)) => {
                <Vec<Value> as Elementwise>::elementwise_max(x, y).map(Value::Array)
            }
            (Value::Object(x), Value::Object(y)) => {
                zip_object(x, y, Value::elementwise_max).map(Value::Object)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::elementwise::{elementwise_clamp, elementwise_max, elementwise_min};

    #[test]
    fn object_clamps_fieldwise() {
        let target = json!({"a": 2.0, "b": true});
        let lo = json!({"a": 1.0, "b": false});
        let hi = json!({"a": 3.0, "b": true});
        assert_eq!(elementwise_clamp(&target, &lo, &hi), Some(target.clone()));
    }

    #[test]
    fn object_rebuilds_in_target_order() {
        let target = json!({"wet": 5, "dry": 5});
        let lo = json!({"dry": 0, "wet": 0});
        let hi = json!({"dry": 3, "wet": 3});
        let clamped = elementwise_clamp(&target, &lo, &hi).unwrap();
        let keys: Vec<&str> = clamped.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["wet", "dry"]);
        assert_eq!(clamped, json!({"wet": 3, "dry": 3}));
    }

    #[test]
    fn object_key_set_mismatch_is_absent() {
        let target = json!({"a": 2, "b": 2});
        assert_eq!(elementwise_clamp(&target, &json!({"a": 1}), &json!({"a": 3, "b": 3})), None);
        assert_eq!(
            elementwise_clamp(&target, &json!({"a": 1, "c": 1}), &json!({"a": 3, "b": 3})),
            None
        );
        assert_eq!(elementwise_min(&target, &json!({"a": 1})), None);
    }

    #[test]
    fn kind_mismatch_is_absent() {
        assert_eq!(elementwise_clamp(&json!(5), &json!("a"), &json!(10)), None);
        assert_eq!(elementwise_clamp(&json!(null), &json!(0), &json!(1)), None);
        assert_eq!(elementwise_min(&json!([1]), &json!({"a": 1})), None);
        assert_eq!(elementwise_max(&json!(true), &json!(1)), None);
    }

    #[test]
    fn null_is_a_degenerate_leaf() {
        assert_eq!(elementwise_clamp(&json!(null), &json!(null), &json!(null)), Some(json!(null)));
        assert_eq!(elementwise_min(&json!(null), &json!(null)), Some(json!(null)));
    }

    #[test]
    fn numbers_keep_their_representation() {
        // target inside range: the integer comes back as an integer
        let clamped = elementwise_clamp(&json!(5), &json!(1.5), &json!(10)).unwrap();
        assert_eq!(clamped, json!(5));
        assert!(clamped.is_i64());
        // target below range: the chosen bound's representation wins
        let clamped = elementwise_clamp(&json!(0), &json!(1.5), &json!(10)).unwrap();
        assert_eq!(clamped, json!(1.5));
        assert!(clamped.is_f64());
    }

    #[test]
    fn number_inverted_range_is_absent() {
        assert_eq!(elementwise_clamp(&json!(5), &json!(10), &json!(3)), None);
    }

    #[test]
    fn arrays_follow_the_broadcast_table() {
        assert_eq!(
            elementwise_clamp(&json!([0, 30, 21]), &json!([1]), &json!([20])),
            Some(json!([1, 20, 20]))
        );
        assert_eq!(
            elementwise_clamp(&json!([20, 20, 20]), &json!([10, 11, 1]), &json!([10, 20, 30])),
            Some(json!([10, 20, 20]))
        );
        assert_eq!(elementwise_clamp(&json!([1, 2, 3]), &json!([0, 0]), &json!([9, 9, 9])), None);
        assert_eq!(elementwise_clamp(&json!([]), &json!([0]), &json!([9])), None);
    }

    #[test]
    fn array_min_max_empty_rules() {
        assert_eq!(elementwise_min(&json!([1, 2, 3]), &json!([])), Some(json!([])));
        assert_eq!(elementwise_max(&json!([1, 2, 3]), &json!([])), Some(json!([1, 2, 3])));
        assert_eq!(elementwise_min(&json!([1]), &json!([3, 4, 5, 0])), Some(json!([1, 1, 1, 0])));
        assert_eq!(elementwise_max(&json!([1]), &json!([3, 4, 5, 0])), Some(json!([3, 4, 5, 1])));
    }

    #[test]
    fn nested_payload_end_to_end() {
        let target = json!({
            "gain": 12.0,
            "bands": [0, 30, 21],
            "label": "zebra",
            "routing": {"mode": "surround", "channels": [9, 9]}
        });
        let lo = json!({
            "gain": 0.0,
            "bands": [1],
            "label": "apple",
            "routing": {"mode": "mono", "channels": [0, 0]}
        });
        let hi = json!({
            "gain": 10.0,
            "bands": [20],
            "label": "pear",
            "routing": {"mode": "stereo", "channels": [2, 2]}
        });
        assert_eq!(
            elementwise_clamp(&target, &lo, &hi),
            Some(json!({
                "gain": 10.0,
                "bands": [1, 20, 20],
                "label": "pear",
                "routing": {"mode": "stereo", "channels": [2, 2]}
            }))
        );
    }

    #[test]
    fn deep_failure_poisons_the_root() {
        let target = json!({"routing": {"channels": [1, 2, 3]}});
        let lo = json!({"routing": {"channels": [0, 0]}});
        let hi = json!({"routing": {"channels": [9, 9, 9]}});
        assert_eq!(elementwise_clamp(&target, &lo, &hi), None);
    }
}
