use crate::utils::utils_errors::KitchenGenError;

/// Parses a whitespace-separated numeric string (e.g. a `pos` or `quat` attribute value)
/// into a vector of floats.  No arity checking is done; 3- and 4-element strings both go
/// through the same routine.
pub fn string_to_vec(s: &str) -> Result<Vec<f64>, KitchenGenError> {
    let mut out_vec = vec![];
    for token in s.split_whitespace() {
        let parse_res = token.parse::<f64>();
        match parse_res {
            Ok(v) => { out_vec.push(v); }
            Err(_) => {
                return Err(KitchenGenError::new_generic_error_string(format!("could not parse {:?} as a float in string_to_vec.", token), file!(), line!()));
            }
        }
    }
    return Ok(out_vec);
}

/// Inverse of `string_to_vec`: space-joined stringification of a float sequence.
pub fn vec_to_string(v: &[f64]) -> String {
    let strings: Vec<String> = v.iter().map(|x| x.to_string()).collect();
    return strings.join(" ");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_vec() {
        assert_eq!(string_to_vec("2.25 -0.8 0").expect("error"), vec![2.25, -0.8, 0.0]);
        assert_eq!(string_to_vec("0.7071068 0 0 0.7071068").expect("error"), vec![0.7071068, 0.0, 0.0, 0.7071068]);
        assert_eq!(string_to_vec("").expect("error"), Vec::<f64>::new());
        assert!(string_to_vec("1 two 3").is_err());
    }

    #[test]
    fn test_round_trip_parse_then_stringify() {
        let v = vec![2.25, -0.8, 0.0, 0.7071068];
        assert_eq!(string_to_vec(vec_to_string(&v).as_str()).expect("error"), v);
    }

    #[test]
    fn test_round_trip_stringify_then_parse() {
        let s = "3.2  -3.1\t0.93";
        let v = string_to_vec(s).expect("error");
        let reparsed = string_to_vec(vec_to_string(&v).as_str()).expect("error");
        assert_eq!(reparsed, v);
    }
}
