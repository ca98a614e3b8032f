use anyhow::{Context, Result, anyhow, bail};
use schemars::Schema;
use serde_json::{Map, Value};

type Object = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

/// File-path constraints declared with `"format": "path"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathHints {
    pub must_exist: bool,
    pub extensions: Vec<String>,
}

/// One scalar parameter of a choice variant, as the prompts need it.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub required: bool,
    pub kind: FieldKind,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub path: Option<PathHints>,
}

/// Lists the scalar fields of the `params` object of variant `kind_key`.
///
/// Fields whose schema is not a scalar (arrays, nested choices) are left out;
/// their serde defaults apply.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let branch = find_branch(root_obj, kind_key)?;

    let Some(params) = branch
        .get("properties")
        .and_then(Value::as_object)
        .and_then(|p| p.get("params"))
        .and_then(Value::as_object)
        .and_then(|p| resolve(root_obj, p))
    else {
        return Ok(vec![]);
    };

    let Some(props) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let required: Vec<&str> = params
        .get("required")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = Vec::new();
    for (name, field) in props {
        let field = field
            .as_object()
            .with_context(|| format!("schema of field '{name}' is not an object"))?;
        let field =
            resolve(root_obj, field).ok_or_else(|| anyhow!("unresolved $ref for field '{name}'"))?;

        if let Some(spec) = field_spec(name, field, required.contains(&name.as_str())) {
            out.push(spec);
        }
    }
    Ok(out)
}

fn find_branch<'a>(root: &'a Object, kind_key: &str) -> Result<&'a Object> {
    let branches = root
        .get("oneOf")
        .or_else(|| root.get("anyOf"))
        .and_then(Value::as_array)
        .context("schema has no oneOf/anyOf variants")?;

    for branch in branches {
        let Some(obj) = branch.as_object() else {
            continue;
        };
        let tag = obj
            .get("properties")
            .and_then(Value::as_object)
            .and_then(|p| p.get("type"))
            .and_then(Value::as_object);
        if tag.is_some_and(|t| tag_is(t, kind_key)) {
            return Ok(obj);
        }
    }
    bail!("no variant with type={kind_key}")
}

fn tag_is(tag: &Object, kind_key: &str) -> bool {
    if tag.get("const").and_then(Value::as_str) == Some(kind_key) {
        return true;
    }
    matches!(
        tag.get("enum").and_then(Value::as_array).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Follows a local `#/...` reference, unescaping JSON Pointer segments.
/// Objects without `$ref` resolve to themselves.
fn resolve<'a>(root: &'a Object, obj: &'a Object) -> Option<&'a Object> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let pointer = reference.as_str()?.strip_prefix("#/")?;
    pointer.split('/').try_fold(root, |cur, seg| {
        let seg = seg.replace("~1", "/").replace("~0", "~");
        cur.get(&seg)?.as_object()
    })
}

fn scalar_kind(name: &str) -> Option<FieldKind> {
    match name {
        "string" => Some(FieldKind::String),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Boolean),
        _ => None,
    }
}

fn field_kind(ty: Option<&Value>) -> Option<FieldKind> {
    match ty? {
        Value::String(s) => scalar_kind(s),
        // Option<T> shows up as ["T", "null"]
        Value::Array(types) => types.iter().filter_map(Value::as_str).find_map(scalar_kind),
        _ => None,
    }
}

fn path_hints(field: &Object) -> Option<PathHints> {
    if field.get("format").and_then(Value::as_str) != Some("path") {
        return None;
    }
    Some(PathHints {
        must_exist: field
            .get("x-must-exist")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        extensions: field
            .get("x-extensions")
            .and_then(Value::as_array)
            .map(|a| a.iter().filter_map(Value::as_str).map(str::to_string).collect())
            .unwrap_or_default(),
    })
}

fn field_spec(name: &str, field: &Object, required: bool) -> Option<FieldSpec> {
    let kind = field_kind(field.get("type"))?;
    let bound = |keys: [&str; 2]| keys.iter().find_map(|k| field.get(*k)).and_then(Value::as_f64);

    Some(FieldSpec {
        name: name.to_string(),
        title: field
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(name)
            .to_string(),
        description: field
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        required,
        kind,
        default: field.get("default").cloned(),
        min: bound(["minimum", "exclusiveMinimum"]),
        max: bound(["maximum", "exclusiveMaximum"]),
        path: path_hints(field),
    })
}
