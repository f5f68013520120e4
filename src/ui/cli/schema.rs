use anyhow::{Context, Result, bail};
use schemars::{Schema, schema_for};
use serde_json::{Map, Value};

/// Prompt description of one numeric form field, read from a JSON Schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub default: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

pub fn form_schema<T: schemars::JsonSchema>() -> Schema {
    schema_for!(T)
}

/// Field specs of a struct schema, in property order.
pub fn field_specs(root: &Schema) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let props = root_obj
        .get("properties")
        .and_then(|v| v.as_object())
        .context("schema has no properties")?;

    let mut out = Vec::with_capacity(props.len());
    for (name, field_schema) in props {
        let mut fs_obj = field_schema
            .as_object()
            .context("field schema not object")?;

        if fs_obj.get("$ref").is_some() {
            fs_obj = resolve_ref_obj(root_obj, fs_obj)
                .with_context(|| format!("failed to resolve field $ref for '{name}'"))?;
        }

        if !is_numeric(fs_obj.get("type")) {
            bail!("field '{name}' is not numeric");
        }

        let title = fs_obj
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or(name)
            .to_string();

        let description = fs_obj
            .get("description")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let min = fs_obj
            .get("minimum")
            .or_else(|| fs_obj.get("exclusiveMinimum"))
            .and_then(|v| v.as_f64());

        let max = fs_obj
            .get("maximum")
            .or_else(|| fs_obj.get("exclusiveMaximum"))
            .and_then(|v| v.as_f64());

        out.push(FieldSpec {
            name: name.clone(),
            title,
            description,
            default: fs_obj.get("default").and_then(|v| v.as_f64()),
            min,
            max,
        });
    }

    Ok(out)
}

/// Resolve a local $ref like "#/$defs/Foo" against the root object.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn is_numeric(ty: Option<&Value>) -> bool {
    let numeric = |s: &str| matches!(s, "number" | "integer");
    match ty {
        Some(Value::String(s)) => numeric(s),
        // unions like ["null", "number"] for Option<f64>
        Some(Value::Array(arr)) => arr.iter().filter_map(|v| v.as_str()).any(numeric),
        _ => false,
    }
}
