use crate::DirectoryOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch and map the catalog; answer with `Msg::LoadFinished`.
    LoadCatalog {
        url: String,
        options: DirectoryOptions,
    },
}
