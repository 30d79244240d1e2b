//! Test fixtures: small PDFs with Separation color spaces, built with lopdf

#![allow(dead_code)]

use lopdf::{dictionary, Dictionary, Document, Object, ObjectId};
use std::path::{Path, PathBuf};

pub struct TestFixtures {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
}

impl TestFixtures {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
        }
    }

    /// Adds `[/Separation /<name> /DeviceCMYK <tint function>]`
    pub fn separation(&mut self, name: &[u8]) -> ObjectId {
        let tint = self.doc.add_object(dictionary! {
            "FunctionType" => 2_i64,
            "Domain" => vec![Object::Integer(0), Object::Integer(1)],
            "C0" => vec![Object::Integer(0); 4],
            "C1" => vec![Object::Integer(0), Object::Integer(1), Object::Integer(0), Object::Integer(0)],
            "N" => 1_i64,
        });
        self.doc.add_object(Object::Array(vec![
            Object::Name(b"Separation".to_vec()),
            Object::Name(name.to_vec()),
            Object::Name(b"DeviceCMYK".to_vec()),
            Object::Reference(tint),
        ]))
    }

    pub fn object<T: Into<Object>>(&mut self, object: T) -> ObjectId {
        self.doc.add_object(object)
    }

    /// Adds a page whose `/Resources /ColorSpace` holds `entries` in order
    pub fn page_with_color_spaces(&mut self, entries: &[(&str, Object)]) -> ObjectId {
        let mut color_spaces = Dictionary::new();
        for (key, value) in entries {
            color_spaces.set(*key, value.clone());
        }
        self.page(dictionary! {
            "Resources" => dictionary! { "ColorSpace" => color_spaces },
        })
    }

    pub fn page(&mut self, mut page: Dictionary) -> ObjectId {
        page.set("Type", "Page");
        page.set("Parent", self.pages_id);
        page.set(
            "MediaBox",
            vec![Object::Integer(0), Object::Integer(0), Object::Integer(612), Object::Integer(792)],
        );
        let id = self.doc.add_object(page);
        self.kids.push(id.into());
        id
    }

    pub fn build(mut self) -> Document {
        let pages = dictionary! {
            "Type" => "Pages",
            "Count" => self.kids.len() as i64,
            "Kids" => self.kids,
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc
    }

    pub fn to_bytes(self) -> Vec<u8> {
        let mut doc = self.build();
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).expect("serialize fixture");
        buffer
    }

    pub fn write_to(self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        std::fs::write(&path, self.to_bytes()).expect("write fixture");
        path
    }
}

/// Serializes hand-written object bodies as a PDF with a correct xref table.
///
/// Object `n` is `objects[n - 1]`; object 1 must be the catalog. Names are
/// written exactly as given, so escapes like `#20` reach the parser untouched.
pub fn raw_pdf(objects: &[&str]) -> Vec<u8> {
    let mut bytes = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(bytes.len());
        bytes.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
    }

    let xref = bytes.len();
    bytes.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        bytes.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    bytes.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref
        )
        .as_bytes(),
    );
    bytes
}

/// Two pages sharing one Separation whose name is written as `name` in the file
pub fn raw_shared_spot_pdf(name: &str) -> Vec<u8> {
    let spot = format!("[/Separation /{} /DeviceCMYK 6 0 R]", name);
    raw_pdf(&[
        "<< /Type /Catalog /Pages 2 0 R >>",
        "<< /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >>",
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /ColorSpace << /CS0 5 0 R >> >> >>",
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /ColorSpace << /CS1 5 0 R >> >> >>",
        &spot,
        "<< /FunctionType 2 /Domain [0 1] /C0 [0 0 0 0] /C1 [0 1 0 0] /N 1 >>",
    ])
}
