use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Compliance paperwork a working driver has to keep current.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentKind {
    DrivingLicence,
    Insurance,
    Mot,
    PhcLicence,
    Other,
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            DocumentKind::DrivingLicence => "driving_licence",
            DocumentKind::Insurance => "insurance",
            DocumentKind::Mot => "mot",
            DocumentKind::PhcLicence => "phc_licence",
            DocumentKind::Other => "other",
        };
        write!(f, "{}", kind)
    }
}

impl DocumentKind {
    pub fn from_str(value: &str) -> Self {
        match value {
            "driving_licence" => DocumentKind::DrivingLicence,
            "insurance" => DocumentKind::Insurance,
            "mot" => DocumentKind::Mot,
            "phc_licence" => DocumentKind::PhcLicence,
            _ => DocumentKind::Other,
        }
    }
}
