use std::{env, fs};
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::utils::utils_errors::KitchenGenError;

/// Convenience struct that holds many class functions related to file utils.
pub struct FileUtils;
impl FileUtils {
    /// Returns file path to the location from which the program is being executed.
    pub fn get_path_to_src() -> PathBuf {
        let path_buf = env::current_dir().expect("error");
        return path_buf;
    }
    /// Reads contents of file and outputs it to a string.
    pub fn read_file_contents_to_string(p: &PathBuf) -> Result<String, KitchenGenError> {
        let mut file_res = File::open(p);
        return match &mut file_res {
            Ok(f) => {
                let mut contents = String::new();
                let read_res = f.read_to_string(&mut contents);
                match read_res {
                    Ok(_) => { Ok(contents) }
                    Err(e) => { Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())) }
                }
            }
            Err(e) => {
                Err(KitchenGenError::new_generic_error_string(format!("could not open file {:?}: {}", p, e), file!(), line!()))
            }
        }
    }
    /// Writes the given string to a file, overwriting any previous contents.  Parent
    /// directories are created when missing.
    pub fn write_string_to_file(s: &str, p: &PathBuf) -> Result<(), KitchenGenError> {
        let parent_option = p.parent();
        if let Some(parent) = parent_option {
            let create_res = fs::create_dir_all(parent);
            if let Err(e) = create_res {
                return Err(KitchenGenError::new_generic_error_string(format!("could not create directory {:?}: {}", parent, e), file!(), line!()));
            }
        }
        let file_res = File::create(p);
        return match file_res {
            Ok(mut f) => {
                let write_res = f.write_all(s.as_bytes());
                match write_res {
                    Ok(_) => { Ok(()) }
                    Err(e) => { Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())) }
                }
            }
            Err(e) => {
                Err(KitchenGenError::new_generic_error_string(format!("could not create file {:?}: {}", p, e), file!(), line!()))
            }
        }
    }
    /// Saves given object to a file as a JSON string.  The object must be serializable using serde json.
    pub fn save_object_to_file_as_json<T: Serialize>(object: &T, p: &PathBuf) -> Result<(), KitchenGenError> {
        let json_res = serde_json::to_string(object);
        return match json_res {
            Ok(json_str) => { Self::write_string_to_file(json_str.as_str(), p) }
            Err(e) => { Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())) }
        }
    }
    /// Reads object that was serialized by serde JSON from a file.
    pub fn load_object_from_json_file<T: DeserializeOwned>(p: &PathBuf) -> Result<T, KitchenGenError> {
        let contents = Self::read_file_contents_to_string(p)?;
        return Self::load_object_from_json_string(contents.as_str());
    }
    pub fn load_object_from_json_string<T: DeserializeOwned>(json_str: &str) -> Result<T, KitchenGenError> {
        let o_res = serde_json::from_str(json_str);
        return match o_res {
            Ok(o) => { Ok(o) }
            Err(_) => {
                Err(KitchenGenError::new_generic_error_str("load_object_from_json_string() failed.  The given json_string is incompatible with the requested type.", file!(), line!()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().expect("error");
        let p = dir.path().join("nested").join("out.txt");
        FileUtils::write_string_to_file("hello kitchen", &p).expect("error");
        let contents = FileUtils::read_file_contents_to_string(&p).expect("error");
        assert_eq!(contents, "hello kitchen");
    }

    #[test]
    fn test_json_object_round_trip() {
        let dir = tempdir().expect("error");
        let p = dir.path().join("object.json");
        let object = vec![1.0, 2.5, -3.0];
        FileUtils::save_object_to_file_as_json(&object, &p).expect("error");
        let loaded: Vec<f64> = FileUtils::load_object_from_json_file(&p).expect("error");
        assert_eq!(loaded, object);
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let res = FileUtils::read_file_contents_to_string(&PathBuf::from("/nonexistent/kitchen.xml"));
        assert!(res.is_err());
    }
}
