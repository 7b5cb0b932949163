use framegen_types::{ExampleCatalog, FrameworkTypeInfo, GeneratedFramework, TypeCatalog};

/// Everything the page knows between interactions.
///
/// Catalogs are written once by `Controller::start`; `current` is only ever
/// replaced as a whole.
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) types: TypeCatalog,
    pub(crate) examples: ExampleCatalog,
    pub(crate) selected_type: Option<String>,
    pub(crate) current: Option<GeneratedFramework>,
}

impl Session {
    pub fn types(&self) -> &TypeCatalog {
        &self.types
    }

    pub fn examples(&self) -> &ExampleCatalog {
        &self.examples
    }

    pub fn selected_type(&self) -> Option<&str> {
        self.selected_type.as_deref()
    }

    pub fn current(&self) -> Option<&GeneratedFramework> {
        self.current.as_ref()
    }

    /// The current framework together with its type record.
    pub fn current_with_type(&self) -> Option<(&GeneratedFramework, &FrameworkTypeInfo)> {
        let framework = self.current.as_ref()?;
        let info = framework.type_info(&self.types).ok()?;
        Some((framework, info))
    }
}
