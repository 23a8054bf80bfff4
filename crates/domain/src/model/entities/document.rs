// crates/domain/src/model/entities/document.rs
use confdiff_shared_kernel::{DeviceId, DomainError, DomainResult};
use hashbrown::HashSet;

/// One device's raw configuration dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    device: DeviceId,
    text: String,
}

impl ConfigDocument {
    pub fn new(device: impl Into<DeviceId>, text: impl Into<String>) -> Self {
        Self { device: device.into(), text: text.into() }
    }

    pub fn device(&self) -> &DeviceId {
        &self.device
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Documents in input order, at most one per device.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<ConfigDocument>,
    seen: HashSet<DeviceId>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents(documents: impl IntoIterator<Item = ConfigDocument>) -> DomainResult<Self> {
        let mut corpus = Self::new();
        for document in documents {
            corpus.push(document)?;
        }
        Ok(corpus)
    }

    pub fn push(&mut self, document: ConfigDocument) -> DomainResult<()> {
        if !self.seen.insert(document.device.clone()) {
            return Err(DomainError::DuplicateDevice { device: document.device.to_string() });
        }
        self.documents.push(document);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigDocument> {
        self.documents.iter()
    }

    pub fn devices(&self) -> Vec<DeviceId> {
        self.documents.iter().map(|doc| doc.device.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a ConfigDocument;
    type IntoIter = std::slice::Iter<'a, ConfigDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
