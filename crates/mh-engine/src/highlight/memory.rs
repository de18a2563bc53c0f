//! In-process render layer: a stand-in for the page's highlight registry.

use std::collections::BTreeMap;

use mh_common::RenderError;

use super::{Highlight, RenderLayer};

#[derive(Debug, Default)]
pub struct MemoryRenderLayer {
    highlights: BTreeMap<String, Highlight>,
    sheets: Vec<(String, String)>,
    reject_registrations: bool,
}

impl MemoryRenderLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A layer whose registry refuses every highlight and stylesheet.
    pub fn failing() -> Self {
        Self {
            reject_registrations: true,
            ..Self::default()
        }
    }

    pub fn highlight(&self, name: &str) -> Option<&Highlight> {
        self.highlights.get(name)
    }

    pub fn highlights(&self) -> impl Iterator<Item = (&str, &Highlight)> {
        self.highlights.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn stylesheet(&self, owner: &str) -> Option<&str> {
        self.sheets
            .iter()
            .find(|(tag, _)| tag == owner)
            .map(|(_, css)| css.as_str())
    }

    pub fn stylesheet_count(&self) -> usize {
        self.sheets.len()
    }
}

impl RenderLayer for MemoryRenderLayer {
    fn highlight_names(&self) -> Vec<String> {
        self.highlights.keys().cloned().collect()
    }

    fn delete_highlight(&mut self, name: &str) {
        self.highlights.remove(name);
    }

    fn set_highlight(&mut self, name: &str, highlight: Highlight) -> Result<(), RenderError> {
        if self.reject_registrations {
            return Err(RenderError::Registration {
                name: name.to_string(),
                reason: "registry rejected the highlight".into(),
            });
        }
        self.highlights.insert(name.to_string(), highlight);
        Ok(())
    }

    fn replace_stylesheet(&mut self, owner: &str, css: &str) -> Result<(), RenderError> {
        if self.reject_registrations {
            return Err(RenderError::Stylesheet(format!(
                "cannot adopt stylesheet '{owner}'"
            )));
        }
        match self.sheets.iter_mut().find(|(tag, _)| tag == owner) {
            Some((_, text)) => *text = css.to_string(),
            None => self.sheets.push((owner.to_string(), css.to_string())),
        }
        Ok(())
    }
}
