//! Typed change and submission events.
//!
//! Yew hands components a raw `web_sys::Event`; these types pull out what a
//! form actually cares about. A change on a checkbox or radio reports its
//! `checked` flag, a file input reports the selected files, every other
//! kind reports its string value.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use wasm_bindgen::JsCast;
use web_sys::js_sys::{try_iter, Array};
use web_sys::{Event, File, FileList, FormData, HtmlFormElement, HtmlInputElement, SubmitEvent};
use yew::html::TargetCast;

use crate::error::{js_to_form_error, FormError};
use crate::kind::InputKind;

/// Metadata of one file picked in an `<input type="file">`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: f64,
    #[serde(rename = "type")]
    pub mime: String,
}

impl From<&File> for SelectedFile {
    fn from(file: &File) -> Self {
        Self {
            name: file.name(),
            size: file.size(),
            mime: file.type_(),
        }
    }
}

fn selected_files(list: Option<FileList>) -> Vec<SelectedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|file| SelectedFile::from(&file))
        .collect()
}

/// The value a field reports on change.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    Files(Vec<SelectedFile>),
}

impl FieldValue {
    /// Pick the reported value for `kind` out of the element state.
    pub fn classify(kind: InputKind, value: String, checked: bool, files: Vec<SelectedFile>) -> Self {
        match kind {
            k if k.is_checkable() => FieldValue::Checked(checked),
            InputKind::File => FieldValue::Files(files),
            _ => FieldValue::Text(value),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_checked(&self) -> Option<bool> {
        match self {
            FieldValue::Checked(checked) => Some(*checked),
            _ => None,
        }
    }
}

/// One user edit of one field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldChange {
    pub name: String,
    pub kind: InputKind,
    pub value: FieldValue,
}

impl FieldChange {
    /// Read the change out of an `input`/`change` event fired by an `<input>`.
    ///
    /// Returns `None` when the event target is not an input element.
    pub fn from_event(event: &Event) -> Option<Self> {
        let input: HtmlInputElement = event.target_dyn_into()?;
        Some(Self::from_input(&input))
    }

    pub fn from_input(input: &HtmlInputElement) -> Self {
        let kind = InputKind::from_attr(&input.type_());
        let files = if kind == InputKind::File {
            selected_files(input.files())
        } else {
            Vec::new()
        };
        Self {
            name: input.name(),
            kind,
            value: FieldValue::classify(kind, input.value(), input.checked(), files),
        }
    }

    /// The console label for this change, e.g. `"email changed:"`.
    pub fn log_label(&self) -> String {
        match self.value {
            FieldValue::Files(_) => format!("{} files selected:", self.name),
            _ => format!("{} changed:", self.name),
        }
    }
}

/// The `(name, value)` entries of a form at the moment it was submitted.
///
/// Order follows the form's tree order; names may repeat (checkbox
/// groups). File entries hold the file name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    entries: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Snapshot the form that dispatched `event`.
    pub fn from_submit(event: &SubmitEvent) -> Result<Self, FormError> {
        let form: HtmlFormElement = event.target_dyn_into().ok_or_else(|| FormError::Js {
            message: "submit event target is not a <form>".into(),
        })?;
        Self::from_form(&form)
    }

    pub fn from_form(form: &HtmlFormElement) -> Result<Self, FormError> {
        let data = FormData::new_with_form(form).map_err(js_to_form_error)?;
        let iter = try_iter(data.as_ref())
            .map_err(js_to_form_error)?
            .ok_or_else(|| FormError::Js {
                message: "FormData is not iterable".into(),
            })?;

        let mut entries = Vec::new();
        for entry in iter {
            let pair = Array::from(&entry.map_err(js_to_form_error)?);
            let name = pair.get(0).as_string().unwrap_or_default();
            let raw = pair.get(1);
            let value = raw
                .as_string()
                .or_else(|| raw.dyn_ref::<File>().map(File::name))
                .unwrap_or_default();
            entries.push((name, value));
        }
        Ok(Self { entries })
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every value submitted under `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Values for `names`, in the order asked, skipping absent ones.
    pub fn pick<'a>(&'a self, names: &[&str]) -> Vec<&'a str> {
        names.iter().filter_map(|name| self.get(name)).collect()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
