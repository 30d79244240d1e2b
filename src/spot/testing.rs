//! In-memory document builder for unit tests

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId};

/// `[/Separation /<name> /DeviceCMYK 0]`
pub fn separation(name: &str) -> Object {
    Object::Array(vec![
        Object::Name(b"Separation".to_vec()),
        Object::Name(name.as_bytes().to_vec()),
        Object::Name(b"DeviceCMYK".to_vec()),
        Object::Integer(0),
    ])
}

/// Builds a single-level page tree. Objects added before `finish` keep the
/// ids returned to the caller.
pub struct DocumentFixture {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    inherited: Option<Dictionary>,
}

impl DocumentFixture {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
            inherited: None,
        }
    }

    pub fn add<T: Into<Object>>(&mut self, object: T) -> ObjectId {
        self.doc.add_object(object)
    }

    pub fn page(&mut self, mut page: Dictionary) -> ObjectId {
        page.set("Type", "Page");
        page.set("Parent", self.pages_id);
        let id = self.doc.add_object(page);
        self.kids.push(id.into());
        id
    }

    /// Resources placed on the `Pages` node for pages to inherit
    pub fn inherited_resources(&mut self, resources: Dictionary) {
        self.inherited = Some(resources);
    }

    pub fn finish(mut self) -> Document {
        let mut pages = dictionary! {
            "Type" => "Pages",
            "Count" => self.kids.len() as i64,
            "Kids" => self.kids,
        };
        if let Some(resources) = self.inherited {
            pages.set("Resources", resources);
        }
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc
    }
}

/// Debug rendering of an array, for byte-level before/after comparisons
pub fn render(items: &[Object]) -> String {
    format!("{:?}", items)
}
