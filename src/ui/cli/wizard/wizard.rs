use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::path::Path;
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::PromptDriver;
use crate::ui::types::choices::{FieldKind, FieldSpec, PathHints, UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

fn kind_items<K>() -> (Vec<K>, Vec<String>)
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let text = match k.get_detailed_message() {
                Some(desc) if !desc.is_empty() => format!("{label}  {DIM_ITALIC}{desc}{RESET}"),
                _ => label.to_string(),
            };
            (k, text)
        })
        .unzip()
}

/// Walks the user through picking a variant of `C` and filling its params.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let (kinds, labels) = kind_items::<C::Kind>();
    let picked = driver.select(C::prompt_label(), C::prompt_help(), &labels)?;
    let Some(&kind) = kinds.get(picked) else {
        bail!("no option at index {picked} for '{}'", C::prompt_label());
    };

    let key: &'static str = kind.into();
    let specs = specs_for_kind(&C::schema(), key)?;
    let defaults = C::default_params(kind);

    let mut params = Map::new();
    for spec in &specs {
        let init = spec
            .default
            .clone()
            .filter(|v| !v.is_null())
            .or_else(|| defaults.get(&spec.name).cloned());
        if let Some(value) = ask_field(driver, spec, init)? {
            params.insert(spec.name.clone(), value);
        }
    }

    if let Some(extra) = C::subprompts(driver, kind)? {
        params.extend(extra);
    }
    C::from_parts(kind, Value::Object(params))
        .with_context(|| format!("invalid parameters for '{key}'"))
}

/// `None` leaves the field to its serde default.
fn ask_field<D: PromptDriver>(
    driver: &D,
    spec: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = spec.description.as_deref().unwrap_or("");

    let value = match spec.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&spec.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .as_ref()
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let answer = match &spec.path {
                Some(hints) => prompt_path(driver, spec, help, &def, hints)?,
                None => driver.ask_string(&spec.title, help, &def)?,
            };
            let answer = answer.trim();
            if answer.is_empty() && !spec.required {
                return Ok(None);
            }
            Value::String(answer.to_string())
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            Value::from(driver.ask_u64(
                &spec.title,
                help,
                def,
                spec.min.map(|x| x as u64),
                spec.max.map(|x| x as u64),
            )?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&spec.title, help, def, spec.min, spec.max)?)
        }
    };
    Ok(Some(value))
}

fn validate_path(input: &str, hints: &PathHints) -> Result<(), String> {
    let p = Path::new(input);

    if hints.must_exist && !p.exists() {
        return Err(format!("Path does not exist: {}", p.display()));
    }
    if p.is_dir() {
        return Err("Expected a file path, not a directory".into());
    }
    if !hints.extensions.is_empty() {
        match p.extension().and_then(|e| e.to_str()) {
            Some(ext) if hints.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) => {}
            _ => return Err(format!("Expected a .{} file", hints.extensions.join(" / ."))),
        }
    }
    Ok(())
}

/// Re-asks until the answer is a usable path. A blank answer is accepted
/// for optional fields.
fn prompt_path<D: PromptDriver>(
    driver: &D,
    spec: &FieldSpec,
    help: &str,
    default: &str,
    hints: &PathHints,
) -> Result<String> {
    let help = if help.is_empty() {
        "Please type a valid file path"
    } else {
        help
    };
    let help = if spec.required {
        help.to_string()
    } else {
        format!("{help}\n(leave blank for none)")
    };

    loop {
        let answer = driver.ask_string(&spec.title, &help, default)?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            if !spec.required {
                return Ok(String::new());
            }
            eprintln!("✗ Path cannot be empty");
            continue;
        }
        match validate_path(trimmed, hints) {
            Ok(()) => return Ok(trimmed.to_string()),
            Err(msg) => eprintln!("✗ {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Scripted, ScriptedDriver};
    use crate::ui::types::choices::{
        AgreementParameters, EstimatorChoice, FixtureParameters, SimulatedParameters,
        SourceChoice, TaskChoice,
    };
    use std::path::PathBuf;

    fn json_tempfile() -> tempfile::NamedTempFile {
        tempfile::Builder::new().suffix(".json").tempfile().unwrap()
    }

    #[test]
    fn picks_json_file_and_retries_bad_paths() {
        let file = json_tempfile();
        let good = file.path().to_string_lossy().into_owned();
        let driver = ScriptedDriver::new(vec![
            Scripted::Pick(0),
            Scripted::Text("does/not/exist.json".into()),
            Scripted::Text(String::new()),
            Scripted::Text(good.clone()),
        ]);

        let c: SourceChoice = prompt_choice(&driver).unwrap();
        assert_eq!(
            c,
            SourceChoice::JsonFile(crate::ui::types::choices::JsonFileParameters {
                path: PathBuf::from(good)
            })
        );
        assert_eq!(driver.remaining(), 0);
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let txt = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let hints = PathHints {
            must_exist: true,
            extensions: vec!["json".into()],
        };
        let err = validate_path(&txt.path().to_string_lossy(), &hints).unwrap_err();
        assert!(err.contains(".json"));
    }

    #[test]
    fn blank_optional_path_is_omitted() {
        let driver = ScriptedDriver::new(vec![Scripted::Pick(1), Scripted::Text("  ".into())]);
        let c: SourceChoice = prompt_choice(&driver).unwrap();
        assert_eq!(c, SourceChoice::Fixture(FixtureParameters { path: None }));
    }

    #[test]
    fn accepting_defaults_gives_default_params() {
        let driver = ScriptedDriver::new(vec![Scripted::Pick(2)]).answering_defaults();
        let c: SourceChoice = prompt_choice(&driver).unwrap();
        assert_eq!(c, SourceChoice::Simulated(SimulatedParameters::default()));
    }

    #[test]
    fn task_wizard_prompts_nested_choices() {
        let driver = ScriptedDriver::new(vec![
            Scripted::Pick(0), // latest-level
            Scripted::Pick(1), // fixture
            Scripted::Pick(0), // agreement
        ])
        .answering_defaults();

        let c: TaskChoice = prompt_choice(&driver).unwrap();
        let TaskChoice::LatestLevel(p) = c;
        assert_eq!(p.window_hours, 72);
        assert_eq!(p.text_prefix, "Text");
        assert_eq!(p.source, SourceChoice::Fixture(FixtureParameters { path: None }));
        assert_eq!(
            p.estimator,
            EstimatorChoice::Agreement(AgreementParameters::default())
        );
    }

    #[test]
    fn out_of_range_pick_is_an_error() {
        let driver = ScriptedDriver::new(vec![Scripted::Pick(9)]);
        assert!(prompt_choice::<EstimatorChoice, _>(&driver).is_err());
    }
}
