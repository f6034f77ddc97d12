//! Page-level PDF reading and writing
//!
//! `PageWriter` accumulates pages copied out of other documents and saves
//! them as one new PDF. Pages are deep-copied together with everything they
//! reference, so source documents can be dropped right after appending.

use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::path::Path;

/// Attributes a page may inherit from its ancestors in the page tree
const INHERITABLE: &[&[u8]] = &[b"MediaBox", b"CropBox", b"Resources", b"Rotate"];

/// Guard against malformed page trees whose Parent links loop
const MAX_TREE_DEPTH: usize = 64;

/// Load a PDF document from disk
pub fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    Ok(Document::load(path)?)
}

/// Save a document, compressing its streams
pub fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    doc.compress();
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Builds an output document one appended page at a time
pub struct PageWriter {
    output: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
}

impl Default for PageWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWriter {
    pub fn new() -> Self {
        let mut output = Document::with_version("1.7");
        let pages_id = output.new_object_id();
        Self {
            output,
            pages_id,
            kids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append every page of `source` in order; returns the number appended.
    ///
    /// On error the writer is left exactly as it was before the call.
    pub fn append_document(&mut self, source: &Document) -> Result<usize> {
        let mark = self.output.max_id;
        match self.copy_pages(source) {
            Ok(targets) => {
                let appended = targets.len();
                self.kids
                    .extend(targets.into_iter().map(Object::Reference));
                Ok(appended)
            }
            Err(e) => {
                self.rollback(mark);
                Err(e)
            }
        }
    }

    /// Copy the pages of `source` into the output; returns the new page ids
    fn copy_pages(&mut self, source: &Document) -> Result<Vec<ObjectId>> {
        let page_ids: Vec<ObjectId> = source.get_pages().values().copied().collect();

        // Reserve targets for all pages first so cross-page references
        // (annotation /P, link destinations) land on the copies
        let mut cache: HashMap<ObjectId, ObjectId> = HashMap::new();
        let targets: Vec<ObjectId> = page_ids
            .iter()
            .map(|&id| {
                let new_id = self.output.new_object_id();
                cache.insert(id, new_id);
                new_id
            })
            .collect();

        for (&page_id, &target_id) in page_ids.iter().zip(&targets) {
            let page_dict = source.get_dictionary(page_id)?;
            let mut copied = Dictionary::new();

            for (key, value) in page_dict.iter() {
                if key.as_slice() == b"Parent" {
                    continue;
                }
                copied.set(
                    key.clone(),
                    copy_object_deep(&mut self.output, source, value, &mut cache)?,
                );
            }

            for &key in INHERITABLE {
                if copied.has(key) {
                    continue;
                }
                if let Some(value) = inherited_attribute(source, page_dict, key) {
                    copied.set(
                        key.to_vec(),
                        copy_object_deep(&mut self.output, source, &value, &mut cache)?,
                    );
                }
            }

            copied.set("Parent", Object::Reference(self.pages_id));
            self.output
                .objects
                .insert(target_id, Object::Dictionary(copied));
        }

        Ok(targets)
    }

    /// Drop every object numbered after `mark` and reuse those numbers
    fn rollback(&mut self, mark: u32) {
        self.output.objects.retain(|&(id, _), _| id <= mark);
        self.output.max_id = mark;
    }

    /// Close the page tree and return the finished document
    pub fn finish(mut self) -> Document {
        let count = self.kids.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.kids)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        self.output
    }

    pub fn save(self, path: impl AsRef<Path>) -> Result<()> {
        save_pdf(self.finish(), path)
    }
}

/// Look up an attribute on the page's ancestors
fn inherited_attribute(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut node = page;
    for _ in 0..MAX_TREE_DEPTH {
        let parent_id = node.get(b"Parent").ok()?.as_reference().ok()?;
        node = doc.get_dictionary(parent_id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
    }
    None
}

/// Deep copy an object from source to output document, following references.
///
/// Each referenced object is copied once; its new id is reserved before its
/// contents are copied, so reference cycles terminate.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let copied = match source.get_object(*id) {
                Ok(referenced) => copy_object_deep(output, source, referenced, cache)?,
                // Dangling references are legal PDF and mean null
                Err(_) => Object::Null,
            };
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        _ => Ok(obj.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_page_doc() -> Document {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let kids: Vec<Object> = (0..2)
            .map(|_| {
                let content_id = doc.add_object(Stream::new(Dictionary::new(), b"q Q".to_vec()));
                doc.add_object(Dictionary::from_iter(vec![
                    ("Type", Object::Name(b"Page".to_vec())),
                    ("Parent", Object::Reference(pages_id)),
                    ("Contents", Object::Reference(content_id)),
                ]))
                .into()
            })
            .collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter(vec![
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(kids)),
                ("Count", Object::Integer(2)),
                (
                    "MediaBox",
                    vec![0.into(), 0.into(), 612.into(), 792.into()].into(),
                ),
            ])),
        );
        let catalog_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_rollback_discards_partial_copy() {
        let source = two_page_doc();
        let mut writer = PageWriter::new();
        writer.append_document(&source).unwrap();

        let objects_before = writer.output.objects.len();
        let max_before = writer.output.max_id;

        // Half a copy: objects land in the output but no page is recorded
        let mark = writer.output.max_id;
        let first_page = *source.get_pages().values().next().unwrap();
        let mut cache = HashMap::new();
        copy_object_deep(
            &mut writer.output,
            &source,
            &Object::Reference(first_page),
            &mut cache,
        )
        .unwrap();
        assert!(writer.output.objects.len() > objects_before);

        writer.rollback(mark);
        assert_eq!(writer.output.objects.len(), objects_before);
        assert_eq!(writer.output.max_id, max_before);
        assert_eq!(writer.page_count(), 2);

        // Appending afterwards still yields a consistent document
        assert_eq!(writer.append_document(&source).unwrap(), 2);
        let doc = writer.finish();
        assert_eq!(doc.get_pages().len(), 4);
    }
}
