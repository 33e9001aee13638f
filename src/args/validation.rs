use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::model::{CUSTOM_COURSE, HOLE_COUNT};

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' could not be read: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the course catalog format
/// format we expect is this:
/// [{ "name": "Course Name", "pars": [<int> x 18] }, { "name": "Other Course" }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    let courses = json
        .as_array()
        .ok_or_else(|| "The json file is not in the correct format. Expected an array.".to_string())?;
    if courses.is_empty() {
        return Err("The json file lists no courses.".to_string());
    }

    let expected_keys = ["name", "pars"];
    for course in courses {
        let obj = course.as_object().ok_or_else(|| {
            "The json file is not in the correct format. Expected objects.".to_string()
        })?;
        for key in obj.keys() {
            if !expected_keys.contains(&key.as_str()) {
                return Err(format!(
                    "The json file is not in the correct format. Expected keys: {expected_keys:?}"
                ));
            }
        }
        let Some(name) = course["name"].as_str() else {
            return Err(
                "The json key name is not in the correct format. Expected a string.".to_string(),
            );
        };
        if name.trim() == CUSTOM_COURSE {
            return Err(format!(
                "The course name '{CUSTOM_COURSE}' is reserved for the free-text course."
            ));
        }
        match obj.get("pars") {
            None | Some(Value::Null) => {}
            Some(Value::Array(pars)) => {
                if pars.len() != HOLE_COUNT
                    || !pars.iter().all(|p| p.as_i64().is_some_and(|v| v > 0))
                {
                    return Err(format!(
                        "The json key pars is not in the correct format. Expected {HOLE_COUNT} positive numbers."
                    ));
                }
            }
            Some(_) => {
                return Err(
                    "The json key pars is not in the correct format. Expected an array."
                        .to_string(),
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_names_with_and_without_pars() {
        let pars: Vec<i32> = vec![4; HOLE_COUNT];
        let catalog = json!([{ "name": "Brevofield", "pars": pars }, { "name": "Zebulon CC" }]);
        assert!(validate_json_format(&catalog).is_ok());
    }

    #[test]
    fn rejects_short_par_rows_and_stray_keys() {
        assert!(validate_json_format(&json!([{ "name": "A", "pars": [4, 4, 3] }])).is_err());
        assert!(validate_json_format(&json!([{ "name": "A", "slope": 113 }])).is_err());
        assert!(validate_json_format(&json!({ "name": "A" })).is_err());
    }

    #[test]
    fn rejects_the_reserved_custom_name() {
        assert!(validate_json_format(&json!([{ "name": "Custom" }])).is_err());
        assert!(validate_json_format(&json!([{ "name": "Custom Links" }])).is_ok());
    }
}
