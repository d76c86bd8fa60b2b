/// A common error type returned by functions throughout the crate.
#[derive(Clone, Debug)]
pub enum KitchenGenError {
    GenericError(String),
    XmlParseError(String),
    AmbiguousMatchError(String),
    IdxOutOfBoundError(String)
}
impl KitchenGenError {
    pub fn new_generic_error_str(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: {} -- File: {}, Line: {}", s, file, line);
        return Self::GenericError(s);
    }
    pub fn new_generic_error_string(s: String, file: &str, line: u32) -> Self {
        return Self::new_generic_error_str(s.as_str(), file, line);
    }
    pub fn new_xml_parse_error(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Could not parse document.  {} -- File: {}, Line: {}", s, file, line);
        return Self::XmlParseError(s);
    }
    pub fn new_ambiguous_match_error(tag: &str, name: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: More than one <{}> element has name {:?}, so the mutation target is ambiguous -- File: {}, Line: {}", tag, name, file, line);
        return Self::AmbiguousMatchError(s);
    }
    pub fn new_idx_out_of_bound_error(given_idx: usize, length_of_array: usize, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Index {:?} is too large for the array of length {:?} -- File: {}, Line: {}", given_idx, length_of_array, file, line);
        return Self::IdxOutOfBoundError(s)
    }
}
