use std::collections::HashMap;
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use crate::utils::utils_errors::KitchenGenError;
use crate::utils::utils_math::vec_to_string;

/// Root tag of every scene and robot description document.
pub const ROOT_TAG: &str = "mujoco";

/// Convenience struct that holds many class functions for editing scene description
/// documents.  All operations take a document string and return a new document string;
/// untouched regions pass through the event pipeline unchanged.  Lookups that find no
/// matching element leave the document as-is, while a mutation target that matches more
/// than one element is an error.
pub struct SceneXmlUtils;
impl SceneXmlUtils {
    /// For every element with the given tag carrying the given attribute, replaces the
    /// attribute value with `new_value` whenever the current value equals `old_value`
    /// exactly.  No-op when nothing matches.
    pub fn replace_attribute_value(xml_str: &str, tag: &str, attribute: &str, old_value: &str, new_value: &str) -> Result<String, KitchenGenError> {
        let mut reader = Reader::from_str(xml_str);
        let mut writer = Writer::new(Vec::new());
        loop {
            let event_res = reader.read_event();
            match event_res {
                Ok(Event::Start(e)) if Self::name_matches(&e, tag) => {
                    match Self::rewrite_if_attribute_equals(&e, attribute, old_value, new_value)? {
                        Some(rewritten) => { Self::write_event(&mut writer, Event::Start(rewritten))?; }
                        None => { Self::write_event(&mut writer, Event::Start(e))?; }
                    }
                }
                Ok(Event::Empty(e)) if Self::name_matches(&e, tag) => {
                    match Self::rewrite_if_attribute_equals(&e, attribute, old_value, new_value)? {
                        Some(rewritten) => { Self::write_event(&mut writer, Event::Empty(rewritten))?; }
                        None => { Self::write_event(&mut writer, Event::Empty(e))?; }
                    }
                }
                Ok(Event::Eof) => { break; }
                Ok(e) => { Self::write_event(&mut writer, e)?; }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        return Self::finish(writer);
    }

    /// Removes every element with the given tag, wherever it appears in the tree.  The
    /// whole subtree under each match is dropped.  No distinction is made between zero
    /// and many matches.
    pub fn remove_subelements_by_tag(xml_str: &str, tag: &str) -> Result<String, KitchenGenError> {
        let mut reader = Reader::from_str(xml_str);
        let mut writer = Writer::new(Vec::new());
        loop {
            let event_res = reader.read_event();
            match event_res {
                Ok(Event::Start(e)) if Self::name_matches(&e, tag) => {
                    Self::skip_subtree(&mut reader, &e)?;
                }
                Ok(Event::Empty(e)) if Self::name_matches(&e, tag) => { }
                Ok(Event::Eof) => { break; }
                Ok(e) => { Self::write_event(&mut writer, e)?; }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        return Self::finish(writer);
    }

    /// Removes the element with the given tag whose `name` attribute equals `name` and
    /// returns its full attribute set, or `None` when nothing matched.  A second element
    /// matching the same tag and name is an ambiguity error.
    pub fn remove_element_by_tag_and_name(xml_str: &str, tag: &str, name: &str) -> Result<(String, Option<HashMap<String, String>>), KitchenGenError> {
        let mut reader = Reader::from_str(xml_str);
        let mut writer = Writer::new(Vec::new());
        let mut removed_attributes: Option<HashMap<String, String>> = None;
        loop {
            let event_res = reader.read_event();
            match event_res {
                Ok(Event::Start(e)) => {
                    if Self::name_and_attribute_match(&e, tag, name)? {
                        if removed_attributes.is_some() {
                            return Err(KitchenGenError::new_ambiguous_match_error(tag, name, file!(), line!()));
                        }
                        removed_attributes = Some(Self::attributes_to_map(&e)?);
                        Self::skip_subtree(&mut reader, &e)?;
                    } else {
                        Self::write_event(&mut writer, Event::Start(e))?;
                    }
                }
                Ok(Event::Empty(e)) => {
                    if Self::name_and_attribute_match(&e, tag, name)? {
                        if removed_attributes.is_some() {
                            return Err(KitchenGenError::new_ambiguous_match_error(tag, name, file!(), line!()));
                        }
                        removed_attributes = Some(Self::attributes_to_map(&e)?);
                    } else {
                        Self::write_event(&mut writer, Event::Empty(e))?;
                    }
                }
                Ok(Event::Eof) => { break; }
                Ok(e) => { Self::write_event(&mut writer, e)?; }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        let out_string = Self::finish(writer)?;
        return Ok((out_string, removed_attributes));
    }

    /// Sets the `pos` and `quat` attributes of the element with the given tag and `name`
    /// attribute to space-joined stringified vectors.  No-op when nothing matches; a
    /// duplicate match is an ambiguity error.
    pub fn set_body_pose(xml_str: &str, tag: &str, name: &str, pos: &[f64], quat: &[f64]) -> Result<String, KitchenGenError> {
        let pos_string = vec_to_string(pos);
        let quat_string = vec_to_string(quat);
        let mut reader = Reader::from_str(xml_str);
        let mut writer = Writer::new(Vec::new());
        let mut already_set = false;
        loop {
            let event_res = reader.read_event();
            match event_res {
                Ok(Event::Start(e)) => {
                    if Self::name_and_attribute_match(&e, tag, name)? {
                        if already_set {
                            return Err(KitchenGenError::new_ambiguous_match_error(tag, name, file!(), line!()));
                        }
                        already_set = true;
                        let rewritten = Self::with_attribute_values_set(&e, &[("pos", pos_string.as_str()), ("quat", quat_string.as_str())])?;
                        Self::write_event(&mut writer, Event::Start(rewritten))?;
                    } else {
                        Self::write_event(&mut writer, Event::Start(e))?;
                    }
                }
                Ok(Event::Empty(e)) => {
                    if Self::name_and_attribute_match(&e, tag, name)? {
                        if already_set {
                            return Err(KitchenGenError::new_ambiguous_match_error(tag, name, file!(), line!()));
                        }
                        already_set = true;
                        let rewritten = Self::with_attribute_values_set(&e, &[("pos", pos_string.as_str()), ("quat", quat_string.as_str())])?;
                        Self::write_event(&mut writer, Event::Empty(rewritten))?;
                    } else {
                        Self::write_event(&mut writer, Event::Empty(e))?;
                    }
                }
                Ok(Event::Eof) => { break; }
                Ok(e) => { Self::write_event(&mut writer, e)?; }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        return Self::finish(writer);
    }

    /// Inserts the given literal line immediately after the first root opening tag.
    /// Later occurrences of the root tag are left untouched; exactly one insertion.
    pub fn insert_after_root_open_tag(xml_str: &str, line: &str) -> Result<String, KitchenGenError> {
        let mut reader = Reader::from_str(xml_str);
        let mut writer = Writer::new(Vec::new());
        let mut inserted = false;
        loop {
            let event_res = reader.read_event();
            match event_res {
                Ok(Event::Start(e)) if !inserted && Self::name_matches(&e, ROOT_TAG) => {
                    inserted = true;
                    Self::write_event(&mut writer, Event::Start(e.into_owned()))?;
                    let raw = format!("\n    {}", line);
                    Self::write_event(&mut writer, Event::Text(BytesText::from_escaped(raw)))?;
                }
                Ok(Event::Eof) => { break; }
                Ok(e) => { Self::write_event(&mut writer, e)?; }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        return Self::finish(writer);
    }

    /// Returns the value of the given attribute on the element, unescaped, or `None`
    /// when the element does not carry it.
    pub fn attribute_value(e: &BytesStart, key: &str) -> Result<Option<String>, KitchenGenError> {
        for attr_res in e.attributes() {
            match attr_res {
                Ok(attr) => {
                    if attr.key.as_ref() == key.as_bytes() {
                        let value_res = attr.unescape_value();
                        return match value_res {
                            Ok(v) => { Ok(Some(v.into_owned())) }
                            Err(e) => { Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())) }
                        }
                    }
                }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        return Ok(None);
    }

    /// Rebuilds the element with the given attribute values set, replacing existing
    /// values and appending attributes the element did not yet carry.  Attribute order
    /// is preserved.
    pub fn with_attribute_values_set(e: &BytesStart, updates: &[(&str, &str)]) -> Result<BytesStart<'static>, KitchenGenError> {
        let elem_name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut out_elem = BytesStart::new(elem_name);
        let mut applied = vec![false; updates.len()];
        for attr_res in e.attributes() {
            match attr_res {
                Ok(attr) => {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let update_idx = updates.iter().position(|(k, _)| *k == key.as_str());
                    match update_idx {
                        Some(idx) => {
                            applied[idx] = true;
                            out_elem.push_attribute((key.as_str(), updates[idx].1));
                        }
                        None => {
                            let value_res = attr.unescape_value();
                            match value_res {
                                Ok(v) => { out_elem.push_attribute((key.as_str(), v.as_ref())); }
                                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
                            }
                        }
                    }
                }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        for (idx, (key, value)) in updates.iter().enumerate() {
            if !applied[idx] {
                out_elem.push_attribute((*key, *value));
            }
        }
        return Ok(out_elem);
    }

    fn name_matches(e: &BytesStart, tag: &str) -> bool {
        return e.name().as_ref() == tag.as_bytes();
    }

    fn name_and_attribute_match(e: &BytesStart, tag: &str, name: &str) -> Result<bool, KitchenGenError> {
        if !Self::name_matches(e, tag) { return Ok(false); }
        let name_value = Self::attribute_value(e, "name")?;
        return Ok(name_value.as_deref() == Some(name));
    }

    fn rewrite_if_attribute_equals(e: &BytesStart, attribute: &str, old_value: &str, new_value: &str) -> Result<Option<BytesStart<'static>>, KitchenGenError> {
        let current = Self::attribute_value(e, attribute)?;
        if current.as_deref() == Some(old_value) {
            let rewritten = Self::with_attribute_values_set(e, &[(attribute, new_value)])?;
            return Ok(Some(rewritten));
        }
        return Ok(None);
    }

    fn attributes_to_map(e: &BytesStart) -> Result<HashMap<String, String>, KitchenGenError> {
        let mut out_map = HashMap::new();
        for attr_res in e.attributes() {
            match attr_res {
                Ok(attr) => {
                    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
                    let value_res = attr.unescape_value();
                    match value_res {
                        Ok(v) => { out_map.insert(key, v.into_owned()); }
                        Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
                    }
                }
                Err(e) => { return Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())); }
            }
        }
        return Ok(out_map);
    }

    fn skip_subtree(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<(), KitchenGenError> {
        let end = start.to_end().into_owned();
        let skip_res = reader.read_to_end(end.name());
        return match skip_res {
            Ok(_) => { Ok(()) }
            Err(e) => { Err(KitchenGenError::new_xml_parse_error(e.to_string().as_str(), file!(), line!())) }
        }
    }

    fn write_event(writer: &mut Writer<Vec<u8>>, event: Event) -> Result<(), KitchenGenError> {
        let write_res = writer.write_event(event);
        return match write_res {
            Ok(_) => { Ok(()) }
            Err(e) => { Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())) }
        }
    }

    fn finish(writer: Writer<Vec<u8>>) -> Result<String, KitchenGenError> {
        let out_res = String::from_utf8(writer.into_inner());
        return match out_res {
            Ok(s) => { Ok(s) }
            Err(e) => { Err(KitchenGenError::new_generic_error_string(e.to_string(), file!(), line!())) }
        }
    }
}
