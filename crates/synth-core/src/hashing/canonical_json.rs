//! JSON canónico: claves de objeto ordenadas, sin espacios. La forma textual
//! es la entrada del fingerprint, de modo que dos documentos estructuralmente
//! iguales produzcan siempre los mismos bytes aunque difiera el orden de
//! inserción de sus claves.

use serde_json::Value;
use std::collections::BTreeMap;

pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&encode_str(s)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let ordered: BTreeMap<&String, &Value> = map.iter().collect();
            out.push('{');
            for (i, (k, v)) in ordered.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&encode_str(k));
                out.push(':');
                write_canonical(v, out);
            }
            out.push('}');
        }
    }
}

fn encode_str(s: &str) -> String {
    // serde_json escapa strings de forma estable
    serde_json::to_string(s).unwrap_or_default()
}
