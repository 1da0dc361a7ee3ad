//! Custom field entries attached to tasks

use serde::{Deserialize, Serialize};

/// Kind of a custom field
///
/// Reports only ever read enumeration fields; every other kind is kept as
/// [`FieldKind::Other`] so unknown subtypes still deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single-choice enumeration
    Enum,
    /// Any other field kind
    #[default]
    #[serde(other)]
    Other,
}

/// One custom field entry on a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Field identifier
    pub gid: String,

    /// Field display name
    #[serde(default)]
    pub name: String,

    /// Field kind
    #[serde(default, rename = "resource_subtype")]
    pub kind: FieldKind,

    /// Selected enumeration option; `None` when the field is left unset
    #[serde(default)]
    pub enum_value: Option<EnumValue>,
}

/// Selected option of an enumeration field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    /// Option identifier
    #[serde(default)]
    pub gid: String,

    /// Option label, e.g. `3-Medium`
    pub name: String,
}

impl CustomField {
    /// Build an enumeration entry, `value = None` meaning "present but unset"
    #[must_use]
    pub fn enumeration(gid: impl Into<String>, name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            gid: gid.into(),
            name: name.into(),
            kind: FieldKind::Enum,
            enum_value: value.map(|v| EnumValue {
                gid: String::new(),
                name: v.to_string(),
            }),
        }
    }

    /// Label of the selected option, if any
    ///
    /// Only enumeration fields carry a selectable option; any other kind
    /// reads as unset.
    #[must_use]
    pub fn value_name(&self) -> Option<&str> {
        if self.kind != FieldKind::Enum {
            return None;
        }
        self.enum_value.as_ref().map(|v| v.name.as_str())
    }
}
