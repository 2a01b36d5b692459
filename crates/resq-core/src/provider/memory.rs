use crate::{
    error::BackendError,
    provider::ResourceBackend,
    request::PropertyRequest,
    resource::Resource,
};

///
/// MemoryBackend
///
/// In-process backend over a fixed resource list.
/// Fetch returns the resources whose properties equal every constraint.
///

#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    resources: Vec<Resource>,
}

impl MemoryBackend {
    #[must_use]
    pub const fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn insert(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

impl FromIterator<Resource> for MemoryBackend {
    fn from_iter<I: IntoIterator<Item = Resource>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ResourceBackend for MemoryBackend {
    fn fetch(&self, request: &PropertyRequest) -> Result<Vec<Resource>, BackendError> {
        Ok(self
            .resources
            .iter()
            .filter(|resource| {
                request
                    .iter()
                    .all(|(property, value)| resource.get(property) == Some(value))
            })
            .cloned()
            .collect())
    }
}
