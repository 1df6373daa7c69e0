//! .anm2 document model.
//!
//! Wraps a parsed XML tree plus the path it was loaded from. The
//! Animations container's child order in this tree is authoritative;
//! the UI list is a projection rebuilt from [`Anm2Document::animation_names`]
//! after every mutation, never edited independently.
//!
//! A file without an Animations element is valid as far as this tool
//! is concerned: lookups return None and the projection is empty.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use log::info;
use xmltree::{Element, EmitterConfig, XMLNode};

use super::reorder::{self, ANIMATION_TAG, Direction, NAME_ATTR};

const ANIMATIONS_TAG: &str = "Animations";

/// The single open document: parsed tree + source path.
///
/// Created on Open (or from the CLI file argument) and replaced
/// wholesale by the next successful load.
#[derive(Debug)]
pub struct Anm2Document {
    root: Element,
    path: Option<PathBuf>,
}

impl Anm2Document {
    /// Load and parse the file at `path`.
    ///
    /// The file handle is scoped to this call and closed on every exit
    /// path, parse failure included. Error strings distinguish read
    /// failures from parse failures.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|e| format!("Read {} error: {}", path.display(), e))?;
        let root = Element::parse(BufReader::new(file))
            .map_err(|e| format!("Parse {} error: {}", path.display(), e))?;

        info!("Loaded {}", path.display());
        Ok(Self {
            root,
            path: Some(path.to_path_buf()),
        })
    }

    /// Parse from any reader (no remembered path).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, String> {
        let root = Element::parse(reader).map_err(|e| format!("Parse error: {}", e))?;
        Ok(Self { root, path: None })
    }

    /// Path the document was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Serialize the current tree back to XML at `path` and remember
    /// the path (Save As semantics). Unmodified subtrees and attribute
    /// order ride through untouched; output is re-indented.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let file =
            File::create(path).map_err(|e| format!("Write {} error: {}", path.display(), e))?;
        self.root
            .write_with_config(file, EmitterConfig::new().perform_indent(true))
            .map_err(|e| format!("Write {} error: {}", path.display(), e))?;

        self.path = Some(path.to_path_buf());
        info!("Saved {}", path.display());
        Ok(())
    }

    /// Re-save to the path the document was loaded from (Save semantics).
    pub fn save_in_place(&mut self) -> Result<(), String> {
        match self.path.clone() {
            Some(path) => self.save(path),
            None => Err("No file path to save to".to_string()),
        }
    }

    /// The single Animations child, or None if the file has none.
    pub fn animations(&self) -> Option<&Element> {
        self.root.get_child(ANIMATIONS_TAG)
    }

    pub fn animations_mut(&mut self) -> Option<&mut Element> {
        self.root.get_mut_child(ANIMATIONS_TAG)
    }

    /// First Animation child whose Name attribute equals `name`.
    pub fn find_animation(&self, name: &str) -> Option<&Element> {
        self.animations()?
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .find(|el| {
                el.name == ANIMATION_TAG
                    && el.attributes.get(NAME_ATTR).map(String::as_str) == Some(name)
            })
    }

    /// Projection of the current order: Name attributes of the
    /// container's Animation children, in document order. Empty when
    /// the container is absent.
    pub fn animation_names(&self) -> Vec<String> {
        self.animations()
            .map(|container| {
                container
                    .children
                    .iter()
                    .filter_map(XMLNode::as_element)
                    .filter(|el| el.name == ANIMATION_TAG)
                    .filter_map(|el| el.attributes.get(NAME_ATTR).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Shift the named animation one step. Returns true if the order
    /// changed (false at the boundaries, with no container, etc).
    pub fn shift_animation(&mut self, name: &str, direction: Direction) -> bool {
        match self.animations_mut() {
            Some(container) => reorder::shift_animation(container, name, direction),
            None => false,
        }
    }

    /// Set the Name attribute of the animation called `old_name`.
    pub fn rename_animation(&mut self, old_name: &str, new_name: &str) -> anyhow::Result<()> {
        let container = self
            .animations_mut()
            .ok_or_else(|| anyhow!("No Animations element in document"))?;
        let anim = container
            .children
            .iter_mut()
            .filter_map(XMLNode::as_mut_element)
            .find(|el| {
                el.name == ANIMATION_TAG
                    && el.attributes.get(NAME_ATTR).map(String::as_str) == Some(old_name)
            })
            .ok_or_else(|| anyhow!("Animation {:?} not found", old_name))?;

        // Inserting over an existing key keeps its slot, so attribute
        // order is preserved.
        anim.attributes
            .insert(NAME_ATTR.to_string(), new_name.to_string());
        Ok(())
    }

    /// Remove the named animation and its whole subtree.
    pub fn delete_animation(&mut self, name: &str) -> anyhow::Result<()> {
        let container = self
            .animations_mut()
            .ok_or_else(|| anyhow!("No Animations element in document"))?;
        let pos = container
            .children
            .iter()
            .position(|node| {
                node.as_element().is_some_and(|el| {
                    el.name == ANIMATION_TAG
                        && el.attributes.get(NAME_ATTR).map(String::as_str) == Some(name)
                })
            })
            .ok_or_else(|| anyhow!("Animation {:?} not found", name))?;

        container.children.remove(pos);
        Ok(())
    }
}
